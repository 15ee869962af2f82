//! Educational text about amplitude modulation.
//!
//! Content is static and structured so that each front-end can lay it out
//! its own way. [`render_plain`] gives a plain-text rendering.

use std::fmt::Write as _;

use crate::modulation::ModulationKind;

/// One row of the AM vs. FM comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub am: &'static str,
    pub fm: &'static str,
}

/// A unit of content inside a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    Formula(&'static str),
    Bullet(&'static str),
    Regime(ModulationKind),
    Application {
        title: &'static str,
        text: &'static str,
    },
    Comparison(&'static [ComparisonRow]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub slug: &'static str,
    pub title: &'static str,
    pub blocks: &'static [Block],
}

pub const AM_VS_FM: &[ComparisonRow] = &[
    ComparisonRow { feature: "Noise Immunity", am: "Lower", fm: "Higher" },
    ComparisonRow { feature: "Audio Quality", am: "Basic", fm: "Better" },
    ComparisonRow { feature: "Power Efficiency", am: "Lower", fm: "Higher" },
    ComparisonRow { feature: "Circuit Complexity", am: "Simpler", fm: "Complex" },
    ComparisonRow { feature: "Bandwidth", am: "Narrower", fm: "Wider" },
];

pub const TOPICS: &[Topic] = &[
    Topic {
        slug: "what-is-am",
        title: "What is Amplitude Modulation?",
        blocks: &[
            Block::Paragraph(
                "Amplitude Modulation (AM) is a modulation technique used in electronic \
                 communication, where the amplitude of a carrier wave is varied in proportion \
                 to the message signal.",
            ),
            Block::Paragraph(
                "This allows information to be transmitted over long distances by encoding it \
                 onto a carrier wave that propagates efficiently through different media.",
            ),
        ],
    },
    Topic {
        slug: "math",
        title: "The Math Behind AM",
        blocks: &[
            Block::Paragraph("The mathematical representation of an AM signal is:"),
            Block::Formula("s(t) = [Ac + Am·cos(2π·fm·t)] · cos(2π·fc·t)"),
            Block::Paragraph("Where:"),
            Block::Bullet("Ac = carrier amplitude"),
            Block::Bullet("Am = message amplitude"),
            Block::Bullet("fm = message frequency"),
            Block::Bullet("fc = carrier frequency"),
            Block::Paragraph(
                "The bracketed term is the envelope. Its mirror image below the axis is drawn \
                 as the lower envelope.",
            ),
        ],
    },
    Topic {
        slug: "modulation-index",
        title: "Modulation Index",
        blocks: &[
            Block::Paragraph(
                "The modulation index (μ) is the ratio of the message amplitude to the carrier \
                 amplitude:",
            ),
            Block::Formula("μ = Am / Ac"),
            Block::Paragraph("This value determines the type of modulation:"),
            Block::Regime(ModulationKind::UnderModulated),
            Block::Regime(ModulationKind::Critical),
            Block::Regime(ModulationKind::OverModulated),
            Block::Paragraph(
                "The sidebands carry μ² / (2 + μ²) of the transmitted power, so even at μ = 1 \
                 two thirds of the power sits in the carrier.",
            ),
        ],
    },
    Topic {
        slug: "applications",
        title: "Applications of AM",
        blocks: &[
            Block::Paragraph("Amplitude modulation is used in various applications:"),
            Block::Application {
                title: "AM Radio Broadcasting",
                text: "Operating in the frequency range of 535-1705 kHz, AM radio was one of the \
                       first widespread applications of amplitude modulation.",
            },
            Block::Application {
                title: "Aviation Communication",
                text: "Aircraft use AM for voice communication in the VHF band (118-137 MHz) due \
                       to its simplicity and reliability.",
            },
            Block::Application {
                title: "Shortwave Radio",
                text: "International broadcasting stations use AM on shortwave bands to reach \
                       audiences across continents.",
            },
            Block::Application {
                title: "Educational Systems",
                text: "AM serves as a foundational concept in communication theory and is used \
                       in educational labs and demonstrations.",
            },
        ],
    },
    Topic {
        slug: "am-vs-fm",
        title: "AM vs. FM",
        blocks: &[
            Block::Paragraph(
                "Amplitude Modulation (AM) and Frequency Modulation (FM) are two primary \
                 modulation techniques:",
            ),
            Block::Comparison(AM_VS_FM),
        ],
    },
];

/// Look up a topic by slug.
pub fn topic(slug: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.slug == slug)
}

pub fn slugs() -> impl Iterator<Item = &'static str> {
    TOPICS.iter().map(|t| t.slug)
}

/// Plain-text rendering of one topic.
pub fn render_plain(topic: &Topic) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", topic.title);
    let _ = writeln!(out, "{}", "=".repeat(topic.title.chars().count()));
    for block in topic.blocks {
        match block {
            Block::Paragraph(text) => {
                let _ = writeln!(out, "{text}");
            }
            Block::Formula(text) => {
                let _ = writeln!(out, "\n    {text}\n");
            }
            Block::Bullet(text) => {
                let _ = writeln!(out, "  • {text}");
            }
            Block::Regime(kind) => {
                let _ = writeln!(out, "  [{} ({})] {}", kind.label(), kind.condition(), kind.description());
            }
            Block::Application { title, text } => {
                let _ = writeln!(out, "  - {title}: {text}");
            }
            Block::Comparison(rows) => {
                let _ = writeln!(out, "  {:<20} {:<10} {:<10}", "Feature", "AM", "FM");
                let _ = writeln!(out, "  {}", "-".repeat(40));
                for row in rows.iter() {
                    let _ = writeln!(out, "  {:<20} {:<10} {:<10}", row.feature, row.am, row.fm);
                }
            }
        }
    }
    out
}
