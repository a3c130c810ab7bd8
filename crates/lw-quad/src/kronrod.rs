//! 21-point Gauss-Kronrod rule with embedded 10-point Gauss rule.

#![allow(clippy::excessive_precision)]

use lw_core::numeric::Real;

/// Kronrod abscissae on [-1, 1], descending, positive half. Odd indices are
/// the 10-point Gauss nodes; the last entry is the centre.
const XGK: [Real; 11] = [
    0.995_657_163_025_808_080_735_527_280_689_003,
    0.973_906_528_517_171_720_077_964_012_084_452,
    0.930_157_491_355_708_226_001_207_180_059_508,
    0.865_063_366_688_984_510_732_096_688_423_493,
    0.780_817_726_586_416_897_063_717_578_345_042,
    0.679_409_568_299_024_406_234_327_365_114_874,
    0.562_757_134_668_604_683_339_000_099_272_694,
    0.433_395_394_129_247_190_799_265_943_165_784,
    0.294_392_862_701_460_198_131_126_603_103_866,
    0.148_874_338_981_631_210_884_826_001_129_720,
    0.0,
];

/// Kronrod weights matching `XGK`.
const WGK: [Real; 11] = [
    0.011_694_638_867_371_874_278_064_396_062_192,
    0.032_558_162_307_964_727_478_818_972_459_390,
    0.054_755_896_574_351_996_031_381_300_244_580,
    0.075_039_674_810_919_952_767_043_140_916_190,
    0.093_125_454_583_697_605_535_065_465_083_366,
    0.109_387_158_802_297_641_899_210_590_325_805,
    0.123_491_976_262_065_851_077_208_292_755_500,
    0.134_709_217_311_473_325_928_054_001_771_707,
    0.142_775_938_577_060_080_797_094_273_138_717,
    0.147_739_104_901_338_491_374_741_391_624_316,
    0.149_445_554_002_916_905_664_936_468_389_821,
];

/// Gauss weights for the nodes `XGK[1], XGK[3], ..., XGK[9]`.
const WG: [Real; 5] = [
    0.066_671_344_308_688_137_593_568_809_893_332,
    0.149_451_349_150_580_593_145_776_339_657_697,
    0.219_086_362_515_982_043_995_534_934_228_163,
    0.269_266_719_309_996_355_091_226_921_569_469,
    0.295_524_224_714_752_870_173_892_994_651_338,
];

/// Number of integrand evaluations per application of the rule.
pub const POINTS: usize = 21;

/// Kronrod estimate on one subinterval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleEstimate {
    pub value: Real,
    pub error: Real,
}

/// Apply the 21-point rule to `f` on `[a, b]`.
///
/// The error estimate is the QUADPACK one: the Kronrod/Gauss difference
/// scaled against the mean deviation of `f`, floored at the rounding level
/// of the absolute integral.
pub fn gk21<F>(f: &F, a: Real, b: Real) -> RuleEstimate
where
    F: Fn(Real) -> Real + ?Sized,
{
    let centre = 0.5 * (a + b);
    let half = 0.5 * (b - a);
    let abs_half = half.abs();

    let f_centre = f(centre);
    let mut result_gauss = 0.0;
    let mut result_kronrod = f_centre * WGK[10];
    let mut result_abs = result_kronrod.abs();
    let mut left = [0.0; 10];
    let mut right = [0.0; 10];

    for j in 0..10 {
        let dx = half * XGK[j];
        let f1 = f(centre - dx);
        let f2 = f(centre + dx);
        left[j] = f1;
        right[j] = f2;
        let sum = f1 + f2;
        result_kronrod += WGK[j] * sum;
        result_abs += WGK[j] * (f1.abs() + f2.abs());
        if j % 2 == 1 {
            result_gauss += WG[j / 2] * sum;
        }
    }

    let mean = result_kronrod * 0.5;
    let mut result_asc = WGK[10] * (f_centre - mean).abs();
    for j in 0..10 {
        result_asc += WGK[j] * ((left[j] - mean).abs() + (right[j] - mean).abs());
    }

    let value = result_kronrod * half;
    result_abs *= abs_half;
    result_asc *= abs_half;

    let mut error = ((result_kronrod - result_gauss) * half).abs();
    if result_asc != 0.0 && error != 0.0 {
        error = result_asc * (200.0 * error / result_asc).powf(1.5).min(1.0);
    }
    if result_abs > Real::MIN_POSITIVE / (50.0 * Real::EPSILON) {
        error = error.max(50.0 * Real::EPSILON * result_abs);
    }

    RuleEstimate { value, error }
}
