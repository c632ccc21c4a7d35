//! End-to-end checks on optimized low-pass designs, one per parity family.

use approx::assert_abs_diff_eq;
use math_audio_cascade_iir::{
    Band, BandType, CascadeError, FilterParam, ParallelConfig, ParityFamily, SectionRoots,
    amplitude_samples, magnitude_db_samples, parse_bands, parse_desire_table,
};
use num_complex::Complex64;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

const SE_COEF: [f64; 11] = [
    0.018656458,
    1.969338828,
    1.120102082,
    0.388717952,
    0.996398946,
    1.048137529,
    1.037079725,
    -4.535575709,
    6.381429398,
    -0.139429968,
    0.763426685,
];

const NO_COEF: [f64; 12] = [
    0.025247504683641238,
    0.8885952985540255,
    -4.097963802039866,
    5.496940685423355,
    0.3983519261092186,
    0.9723236917140877,
    1.1168784833810899,
    0.8492039597182939,
    -0.686114259307724,
    0.22008381076439384,
    -0.22066728558327908,
    0.7668032045079851,
];

const SO_COEF: [f64; 11] = [
    -0.040659737,
    -2.372311969,
    -2.144646171,
    4.343497453,
    1.359348897,
    0.984834163,
    -0.710147059,
    -0.696696684,
    0.514853197,
    0.503697311,
    0.70680348,
];

const MO_COEF: [f64; 12] = [
    -0.040404875,
    0.957674103,
    0.765466003,
    -1.585891794,
    -1.903482473,
    -0.441904071,
    0.79143639,
    -1.149627531,
    0.965348065,
    -0.434908839,
    -1.332562129,
    0.838349784,
];

fn lowpass(n: usize, m: usize, spec: &str) -> FilterParam {
    FilterParam::new(n, m, parse_bands(spec).unwrap(), 200, 50, 5.0).unwrap()
}

#[test]
fn se_design_8_2() {
    let param = lowpass(8, 2, "LPF(0.2:0.3)");
    assert_eq!(param.family(), ParityFamily::SE);
    assert_eq!(param.sample_counts(), &[101, 50, 100]);

    let freq = param.freq_res(&SE_COEF);
    let lens: Vec<usize> = freq.iter().map(Vec::len).collect();
    assert_eq!(lens, vec![101, 50, 100]);
    assert!(freq.iter().flatten().all(|h| h.re.is_finite() && h.im.is_finite()));
    assert_abs_diff_eq!(freq[0][0].norm(), 0.9838207411776128, epsilon = 1e-9);

    let terms = param.evaluate_terms(&SE_COEF);
    assert_abs_diff_eq!(terms.max_error, 0.028749539207775655, epsilon = 1e-9);
    assert_abs_diff_eq!(terms.max_ripple, 1.0000089481486545, epsilon = 1e-9);
    assert_eq!(terms.stability_penalty, 0.0);
    assert_abs_diff_eq!(param.evaluate(&SE_COEF), 100.03053917694561, epsilon = 1e-7);

    let gd = param.group_delay_res(&SE_COEF);
    assert_abs_diff_eq!(gd[0][0], 5.076522970661333, epsilon = 1e-9);
    assert_abs_diff_eq!(gd[0][100], 5.862672937198361, epsilon = 1e-9);
    assert_abs_diff_eq!(gd[2][0], 4.80850796069986, epsilon = 1e-9);
}

#[test]
fn no_design_7_4() {
    let param = lowpass(7, 4, "LPF(0.2:0.275)");
    assert_eq!(param.family(), ParityFamily::NO);
    assert_eq!(param.sample_counts(), &[95, 50, 105]);

    let terms = param.evaluate_terms(&NO_COEF);
    assert_eq!(terms.max_ripple, 0.0);
    assert_eq!(terms.stability_penalty, 0.0);
    assert_abs_diff_eq!(terms.max_error, 0.026067336010905034, epsilon = 1e-9);
    assert_eq!(param.evaluate(&NO_COEF), terms.max_error);

    let gd = param.group_delay_res(&NO_COEF);
    assert_abs_diff_eq!(gd[0][0], 6.548807551949727, epsilon = 1e-9);
    assert_abs_diff_eq!(gd[2][0], -1.6718721563140306, epsilon = 1e-9);
}

#[test]
fn so_design_5_5() {
    let param = lowpass(5, 5, "LPF(0.3:0.345)");
    assert_eq!(param.family(), ParityFamily::SO);
    assert_eq!(param.sample_counts(), &[132, 50, 68]);
    assert_abs_diff_eq!(param.evaluate(&SO_COEF), 0.14147454243610827, epsilon = 1e-9);

    let gd = param.group_delay_res(&SO_COEF);
    assert_abs_diff_eq!(gd[0][0], 2.752926085385159, epsilon = 1e-9);
    assert_abs_diff_eq!(gd[2][0], 1.7039717215642176, epsilon = 1e-9);
}

#[test]
fn mo_design_8_3() {
    let param = lowpass(8, 3, "LPF(0.1:0.145)");
    assert_eq!(param.family(), ParityFamily::MO);
    assert_eq!(param.sample_counts(), &[44, 50, 156]);
    assert_abs_diff_eq!(param.evaluate(&MO_COEF), 0.055428584291029544, epsilon = 1e-9);

    let gd = param.group_delay_res(&MO_COEF);
    assert_abs_diff_eq!(gd[0][0], 5.5021321444069855, epsilon = 1e-9);
    assert_abs_diff_eq!(gd[2][0], -5.638726048883941, epsilon = 1e-9);

    // lone pole first, then one denominator pair
    let poles = param.pole_sections(&MO_COEF);
    assert_eq!(poles.len(), 2);
    assert_eq!(poles[0], SectionRoots::FirstOrder(0.434908839));
    assert_eq!(param.pole_res(&MO_COEF).len(), 3);
    assert_eq!(param.zero_sections(&MO_COEF).len(), 4);
}

#[test]
fn poles_of_every_kind() {
    let band = parse_bands("LPF(0.2:0.3)").unwrap()[0];
    let param = FilterParam::single_band(0, 6, band, 200, 50, 5.0).unwrap();
    let coef = [
        0.018656458,
        -4.097963802039866,
        5.496940685423355,
        -1.585891794,
        -1.903482473,
        1.1168784833810899,
        0.3118543866599108769856,
    ];

    let sections = param.pole_sections(&coef);
    assert_eq!(sections.len(), 3);
    match sections[0] {
        SectionRoots::ComplexConjugate(r) => {
            assert_eq!(r.re, 4.097963802039866 / 2.0);
            assert!(r.im > 0.0);
        }
        other => panic!("expected complex pair, got {:?}", other),
    }
    match sections[1] {
        SectionRoots::RealDistinct(r1, r2) => {
            assert_abs_diff_eq!(r1 + r2, 1.585891794, epsilon = 1e-12);
            assert_abs_diff_eq!(r1 * r2, -1.903482473, epsilon = 1e-12);
        }
        other => panic!("expected real pair, got {:?}", other),
    }
    assert_eq!(
        sections[2],
        SectionRoots::RepeatedReal(-1.1168784833810899 / 2.0)
    );

    let poles = param.pole_res(&coef);
    assert_eq!(poles.len(), 5);
    assert_eq!(poles[1], poles[0].conj());
    assert_eq!(poles[4], Complex64::new(-1.1168784833810899 / 2.0, 0.0));
    assert!(param.zero_res(&coef).is_empty());
}

#[test]
fn non_touching_bands_are_rejected() {
    let bands = vec![
        Band::new(BandType::Pass, 0.0, 0.2).unwrap(),
        Band::new(BandType::Stop, 0.25, 0.5).unwrap(),
    ];
    let err = FilterParam::new(4, 4, bands, 200, 50, 5.0).unwrap_err();
    assert!(matches!(err, CascadeError::BandGap { .. }));
    assert!(err.to_string().contains("StopBand( 0.250,  0.500)"));
}

#[test]
fn objective_equals_max_error_for_stable_random_designs() {
    let param = lowpass(4, 4, "LPF(0.2:0.3)");
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        // a0 small enough that |H| stays below 1 in the transition band
        let coef = param.init_stable_coef_with_rng(1e-3, 0.5, &mut rng);
        let terms = param.evaluate_terms(&coef);
        assert_eq!(terms.stability_penalty, 0.0);
        let value = param.evaluate(&coef);
        assert!(value >= 0.0);
        if terms.max_ripple == 0.0 {
            assert_eq!(value, terms.max_error);
        }
    }
}

#[test]
fn batch_evaluation_matches_sequential() {
    let param = lowpass(8, 2, "LPF(0.2:0.3)");
    let mut rng = StdRng::seed_from_u64(7);
    let mut candidates: Vec<Vec<f64>> = (0..16)
        .map(|_| param.init_coef_with_rng(1.0, 2.0, 2.0, &mut rng))
        .collect();
    candidates.push(SE_COEF.to_vec());

    let expected: Vec<f64> = candidates.iter().map(|c| param.evaluate(c)).collect();
    let got = param.evaluate_batch(&candidates, &ParallelConfig::default());
    assert_eq!(got.len(), expected.len());
    for (g, e) in got.iter().zip(expected.iter()) {
        assert!(g == e || (g.is_nan() && e.is_nan()));
    }
}

#[test]
fn table_rows_drive_evaluation() {
    let table = "No,Numerator,Denominator,State,GroupDelay,NsplitApprox,NsplitTransition\n\
                 0,8,2,LPF(0.2:0.3),5.0,200,50\n\
                 1,7,4,LPF(0.2:0.275),5.0,200,50\n\
                 2,5,5,LPF(0.3:0.345),5.0,200,50\n\
                 3,8,3,LPF(0.1:0.145),5.0,200,50\n";
    let params = parse_desire_table(Cursor::new(table)).unwrap();
    let families: Vec<ParityFamily> = params.iter().map(FilterParam::family).collect();
    assert_eq!(
        families,
        vec![
            ParityFamily::SE,
            ParityFamily::NO,
            ParityFamily::SO,
            ParityFamily::MO
        ]
    );
    assert_abs_diff_eq!(params[1].evaluate(&NO_COEF), 0.026067336010905034, epsilon = 1e-9);
    assert_abs_diff_eq!(params[3].evaluate(&MO_COEF), 0.055428584291029544, epsilon = 1e-9);
}

#[test]
fn rendered_samples_track_the_design() {
    let param = lowpass(8, 2, "LPF(0.2:0.3)");
    let amp = amplitude_samples(&param, &SE_COEF, 0.0, 0.5).unwrap();
    let db = magnitude_db_samples(&param, &SE_COEF, 0.0, 0.5).unwrap();
    assert_eq!(amp.len(), 1001);
    assert_eq!(db.len(), 1001);
    assert_eq!(amp.omega, db.omega);
    assert_abs_diff_eq!(amp.values[0], 0.9838207411776128, epsilon = 1e-9);
    for (a, d) in amp.values.iter().zip(db.values.iter()) {
        assert_abs_diff_eq!(*d, 20.0 * a.log10(), epsilon = 1e-12);
    }

    let json = serde_json::to_string(&amp).unwrap();
    assert!(json.contains("omega"));
    assert!(json.contains("values"));
}
