use super::*;

#[test]
fn mul_div255_endpoints() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(255, 0), 0);
}

#[test]
fn div_round_rounds_half_up() {
    assert_eq!(div_round_u32(5, 2), 3);
    assert_eq!(div_round_u32(4, 3), 1);
    assert_eq!(div_round_u32(0, 7), 0);
}

#[test]
fn round_half_even_ties_go_to_even() {
    assert_eq!(round_half_even_u32(0.5), 0);
    assert_eq!(round_half_even_u32(1.5), 2);
    assert_eq!(round_half_even_u32(2.5), 2);
    assert_eq!(round_half_even_u32(2.6), 3);
    assert_eq!(round_half_even_u32(-3.0), 0);
}

#[test]
fn rgba8_len_detects_overflow() {
    assert_eq!(rgba8_len(2, 3), Some(24));
    assert_eq!(rgba8_len(0, 100), Some(0));
    assert_eq!(rgba8_len(u32::MAX, u32::MAX), None);
}
