/// The last national dex number introduced in each generation, in order.
const GENERATION_DEX_BOUNDS: [u16; 9] = [151, 251, 386, 493, 649, 721, 809, 905, 1025];

/// Determines the generation a species debuted in by its national dex number.
///
/// Returns [`None`] for dex numbers outside of all known generations.
pub fn generation_of_species(dex: u16) -> Option<u8> {
    if dex == 0 {
        return None;
    }
    GENERATION_DEX_BOUNDS
        .iter()
        .position(|last| dex <= *last)
        .map(|index| index as u8 + 1)
}
