//! S5: Frequently Asked Questions

pub const MARKER: &str = "## ❓ FREQUENTLY ASKED QUESTIONS";

static FAQ: &[(&str, &str)] = &[
    (
        "How long before I see results?",
        "Most farmers see improvements within 4-6 weeks.",
    ),
    (
        "What if it doesn't work for my farm?",
        "Adjust the approach based on your specific conditions and consult local experts.",
    ),
    (
        "Is this expensive to implement?",
        "Many techniques are low-cost, and the yield increase usually covers any costs.",
    ),
    (
        "Can I use this with other crops?",
        "Yes, adapt the principles to other crops you grow.",
    ),
];

pub fn generate() -> String {
    let entries: Vec<String> = FAQ
        .iter()
        .map(|(q, a)| format!("**Q: {}**\nA: {}", q, a))
        .collect();

    format!("{}\n\n{}", MARKER, entries.join("\n\n"))
}
