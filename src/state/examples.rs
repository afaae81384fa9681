//! Canned example reviews that can be loaded into the single input.

/// Example texts, addressed 1-based by [`example`].
pub const EXAMPLES: [&str; 4] = [
    "This product exceeded my expectations! The quality is outstanding and delivery was fast.",
    "Terrible experience. The item arrived broken and customer service never replied.",
    "Great product, highly recommend!",
    "I wanted to like it, but it stopped working after two days and the refund took weeks.",
];

/// Example text by 1-based number, if it exists.
pub fn example(number: usize) -> Option<&'static str> {
    number.checked_sub(1).and_then(|index| EXAMPLES.get(index).copied())
}
