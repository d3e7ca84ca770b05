//! Physical layout of the single-zero (European) wheel and the shared
//! number-set constants. Every analysis component references these through
//! this module; the sets are deliberately defined exactly once.

/// Number of pockets on the wheel (0 through 36).
pub const NUMBER_COUNT: usize = 37;

/// Probability of any single pocket under a fair wheel.
pub const UNIFORM_PROBABILITY: f64 = 1.0 / NUMBER_COUNT as f64;

/// The 18 red numbers. Every non-zero number outside this set is black;
/// zero is green.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Clockwise pocket order of the European wheel, starting at zero.
pub const WHEEL_ORDER: [u8; NUMBER_COUNT] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1, 20,
    14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

pub fn is_red(number: u8) -> bool {
    RED_NUMBERS.contains(&number)
}

/// The four pockets physically adjacent to `number`: two on each side of
/// its wheel position, wrapping around the rim.
pub fn wheel_neighbors(number: u8) -> [u8; 4] {
    let pos = WHEEL_ORDER
        .iter()
        .position(|&n| n == number)
        .unwrap_or_default();
    [
        WHEEL_ORDER[(pos + NUMBER_COUNT - 2) % NUMBER_COUNT],
        WHEEL_ORDER[(pos + NUMBER_COUNT - 1) % NUMBER_COUNT],
        WHEEL_ORDER[(pos + 1) % NUMBER_COUNT],
        WHEEL_ORDER[(pos + 2) % NUMBER_COUNT],
    ]
}

/// Numbers covered by a dozen bet (`dozen` in 1..=3).
pub fn dozen_numbers(dozen: u8) -> Vec<u8> {
    let start = (dozen - 1) * 12 + 1;
    (start..start + 12).collect()
}

/// The 18 numbers covered by a red bet, in table order.
pub fn red_numbers() -> Vec<u8> {
    RED_NUMBERS.to_vec()
}

/// The 18 numbers covered by a black bet, in table order.
pub fn black_numbers() -> Vec<u8> {
    (1..=36).filter(|n| !is_red(*n)).collect()
}
