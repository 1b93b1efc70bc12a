//! Sample review fixtures for demos, the `/sample` endpoint, and tests.
//! Always passed explicitly to callers; nothing here is ambient process
//! state.

use crate::review::Review;

/// A small, varied batch covering all sentiment buckets and every aspect
/// of the taxonomy.
pub fn sample_reviews() -> Vec<Review> {
    const SAMPLES: [(&str, u8); 8] = [
        (
            "Absolutely love this product! The quality is excellent and it arrived quickly. \
             Very comfortable and easy to use. Highly recommend to anyone looking for great value.",
            5,
        ),
        (
            "Good product overall. The design is beautiful and build quality is solid. \
             Only complaint is that it's a bit expensive, but you get what you pay for.",
            4,
        ),
        (
            "Best purchase I've made in a long time! So happy with the performance. \
             Fast, reliable, and the customer service was outstanding when I had questions.",
            5,
        ),
        (
            "Disappointed with this purchase. The product broke after just two weeks. \
             Poor durability and not worth the price. Customer service was slow to respond.",
            2,
        ),
        (
            "It's okay. Does what it's supposed to do but nothing special. \
             The material feels a bit cheap. Shipping was fast though.",
            3,
        ),
        (
            "Excellent quality! Very durable and sturdy construction. \
             Love the design and it's super comfortable. Worth every penny.",
            5,
        ),
        (
            "Terrible product. Broke on first use. Cheap materials and poor construction. \
             Complete waste of money. Would not recommend to anyone.",
            1,
        ),
        (
            "Pretty good! The performance exceeded my expectations. \
             Only minor issue is the packaging could be better. Otherwise very satisfied.",
            4,
        ),
    ];

    SAMPLES
        .iter()
        .map(|&(text, rating)| Review::new(text, rating).expect("fixture reviews are well-formed"))
        .collect()
}
