//! Built-in sample catalog

use super::ImageRecord;

/// The six images shipped with galr, in display order
#[must_use]
pub fn sample_records() -> Vec<ImageRecord> {
    vec![
        ImageRecord::new(
            "1",
            "assets/mountain-landscape.jpg",
            "Alpine Peak Serenity",
            &["nature", "mountains", "landscape", "golden hour", "snow"],
        )
        .with_alt("Stunning mountain landscape at golden hour with snow-capped peaks")
        .with_description(
            "A breathtaking view of snow-capped alpine peaks bathed in the warm glow of \
             golden hour. The rugged mountain terrain creates a dramatic silhouette against \
             the evening sky.",
        ),
        ImageRecord::new(
            "2",
            "assets/abstract-art.jpg",
            "Geometric Harmony",
            &["abstract", "art", "geometric", "modern", "colorful"],
        )
        .with_alt("Modern abstract geometric art with vibrant colors")
        .with_description(
            "A contemporary abstract composition featuring bold geometric shapes and vibrant \
             color palettes. This piece explores the intersection of form, color, and modern \
             design aesthetics.",
        ),
        ImageRecord::new(
            "3",
            "assets/ocean-sunset.jpg",
            "Ocean Dreams",
            &["ocean", "sunset", "water", "peaceful", "golden hour"],
        )
        .with_alt("Serene ocean waves at sunset with golden reflections")
        .with_description(
            "Peaceful ocean waves reflecting the golden hues of sunset. The rhythmic motion \
             of water creates a meditative atmosphere as day transitions to night.",
        ),
        ImageRecord::new(
            "4",
            "assets/forest-sunlight.jpg",
            "Mystical Forest",
            &["forest", "nature", "trees", "sunlight", "green"],
        )
        .with_alt("Lush green forest with sunlight filtering through trees")
        .with_description(
            "Sunlight filters through dense forest canopy, creating ethereal beams of light. \
             The lush green vegetation and atmospheric conditions produce a mystical, \
             tranquil environment.",
        ),
        ImageRecord::new(
            "5",
            "assets/architecture.jpg",
            "Modern Minimalism",
            &["architecture", "minimalist", "modern", "design", "white"],
        )
        .with_alt("Minimalist architecture with clean white walls")
        .with_description(
            "Clean lines and pure white surfaces define this minimalist architectural study. \
             The simplicity of form emphasizes space, light, and geometric precision.",
        ),
        ImageRecord::new(
            "6",
            "assets/street-art.jpg",
            "Urban Expression",
            &["street art", "urban", "colorful", "graffiti", "culture"],
        )
        .with_alt("Colorful street art mural with vibrant graffiti")
        .with_description(
            "A vibrant street art mural showcasing bold colors and dynamic forms. This urban \
             artwork represents contemporary cultural expression and creative energy.",
        ),
    ]
}
