use anyhow::Result;

use crate::config::Config;

/// The fixed article set this tool builds its corpus from.
///
/// The list is compiled in; changing it means editing this file. Tests
/// drive the pipeline through the library with their own URLs instead.
pub const ARTICLE_URLS: &[&str] = &[
    "https://www.constructionspecifier.com/aluminum-framed-fenestration-a-guide-to-specifying-paints-and-coatings/3/",
    "https://www.constructionspecifier.com/hydrophobic-coatings-unlock-protection-against-water-intrusion/",
    "https://www.constructionspecifier.com/customize-acoustic-ceilings-with-specialty-coatings/",
    "https://www.constructionspecifier.com/specifying-antimicrobial-coatings-for-architectural-aluminum/",
    "https://www.constructionspecifier.com/quick-cure-coatings-with-pmma-puma-technology/",
    "https://www.constructionspecifier.com/bright-ideas-long-lasting-color-performance-for-field-applied-coatings/",
    "https://www.constructionspecifier.com/corrosion-resistance-and-environmental-considerations-for-architectural-metal-coatings/",
    "https://www.constructionspecifier.com/transformative-urban-planning-with-roof-coatings/",
    "https://www.constructionspecifier.com/using-coatings-exterior-restoration-projects/",
    "https://www.constructionspecifier.com/selecting-durable-high-performance-paints-coatings/",
];

pub fn list_sources(config: &Config) -> Result<()> {
    println!("{:<4} URL", "#");
    for (i, url) in ARTICLE_URLS.iter().enumerate() {
        println!("{:<4} {}", i + 1, url);
    }
    println!();
    println!(
        "{} articles -> {}",
        ARTICLE_URLS.len(),
        config.output.root.display()
    );

    Ok(())
}
