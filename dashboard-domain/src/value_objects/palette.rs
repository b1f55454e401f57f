// Qualitative color palette (colorblind-safe) shared by both figures

pub const QUALITATIVE_SAFE: [&str; 12] = [
    "#88CCEE", "#CC6677", "#DDCC77", "#117733", "#332288", "#AA4499",
    "#44AA99", "#999933", "#882255", "#661100", "#6699CC", "#888888",
];

/// Stable color for the n-th category, cycling when there are more
/// categories than palette entries.
pub fn qualitative_color(index: usize) -> &'static str {
    QUALITATIVE_SAFE[index % QUALITATIVE_SAFE.len()]
}
