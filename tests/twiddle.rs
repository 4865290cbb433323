// Test intent: verifies twiddle table contents including the pinned
// quarter-turn entries and long-table accuracy.
use bluefft::twiddle::fill_twiddles;
use bluefft::{Complex32, Complex64};

const HALF_SQRT2: f64 = 0.7071067811865476;

#[test]
fn table_of_one_entry() {
    let mut table = [Complex64::zero(); 1];
    fill_twiddles(&mut table);
    assert_eq!(table[0], Complex64::new(1.0, 0.0));
}

#[test]
fn table_of_two_entries() {
    let mut table = [Complex64::zero(); 2];
    fill_twiddles(&mut table);
    assert_eq!(table[0], Complex64::new(1.0, 0.0));
    assert_eq!(table[1], Complex64::new(0.0, -1.0));
}

#[test]
fn table_of_four_entries() {
    let mut table = [Complex64::zero(); 4];
    fill_twiddles(&mut table);
    assert_eq!(table[0], Complex64::new(1.0, 0.0));
    assert_eq!(table[1], Complex64::new(HALF_SQRT2, -HALF_SQRT2));
    assert_eq!(table[2], Complex64::new(0.0, -1.0));
    assert_eq!(table[3], Complex64::new(-HALF_SQRT2, -HALF_SQRT2));
}

// Every entry must stay within a few ulps of direct evaluation; the H/4
// and 3H/4 slots are pinned exactly.
#[test]
fn long_table_tracks_direct_evaluation() {
    let half = 256usize;
    let mut table = vec![Complex64::zero(); half];
    fill_twiddles(&mut table);
    for (k, w) in table.iter().enumerate() {
        let angle = -std::f64::consts::PI * k as f64 / half as f64;
        assert!(
            (w.re - angle.cos()).abs() < 1e-12,
            "k={}: re {} vs {}",
            k,
            w.re,
            angle.cos()
        );
        assert!(
            (w.im - angle.sin()).abs() < 1e-12,
            "k={}: im {} vs {}",
            k,
            w.im,
            angle.sin()
        );
    }
    assert_eq!(table[half / 4], Complex64::new(HALF_SQRT2, -HALF_SQRT2));
    assert_eq!(
        table[3 * half / 4],
        Complex64::new(-HALF_SQRT2, -HALF_SQRT2)
    );
}

#[test]
fn single_precision_table_is_consistent() {
    let half = 32usize;
    let mut table = vec![Complex32::zero(); half];
    fill_twiddles(&mut table);
    for (k, w) in table.iter().enumerate() {
        let angle = -std::f32::consts::PI * k as f32 / half as f32;
        assert!((w.re - angle.cos()).abs() < 1e-6, "k={}: re {}", k, w.re);
        assert!((w.im - angle.sin()).abs() < 1e-6, "k={}: im {}", k, w.im);
    }
}
