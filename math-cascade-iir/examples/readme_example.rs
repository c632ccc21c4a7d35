//! Example demonstrating the usage shown in README.md

use math_audio_cascade_iir::*;

fn report(param: &FilterParam, coef: &[f64]) {
    let terms = param.evaluate_terms(coef);
    println!("  family           : {}", param.family());
    println!("  samples per band : {:?}", param.sample_counts());
    println!("  objective        : {:.6}", terms.total());
    println!("  max error        : {:.6}", terms.max_error);
    println!("  max ripple       : {:.6}", terms.max_ripple);
    println!("  stability        : {:.6}", terms.stability_penalty);

    for (band, gd) in param.bands().iter().zip(param.group_delay_res(coef)) {
        if band.band_type() == BandType::Pass {
            let mean = gd.iter().sum::<f64>() / gd.len() as f64;
            println!("  mean pass-band group delay: {:.3}", mean);
        }
    }
}

fn main() {
    println!("Cascade IIR - README Example");
    println!("============================");

    let bands = parse_bands("LPF(0.2:0.3)").expect("valid filter spec");
    let param = FilterParam::new(8, 2, bands, 200, 50, 5.0).expect("contiguous bands");

    // 1. An optimized design
    println!("\n1. Optimized SE design (N=8, M=2):");
    let coef = [
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
    report(&param, &coef);

    println!("  poles:");
    for pole in param.pole_res(&coef) {
        println!("    {:.6} (|p| = {:.6})", pole, pole.norm());
    }

    // 2. Random starting points for an optimizer
    println!("\n2. Random population:");
    let population: Vec<Vec<f64>> = (0..32).map(|_| param.init_stable_coef(1.0, 2.0)).collect();
    let scores = param.evaluate_batch(&population, &ParallelConfig::default());
    let best = scores.iter().cloned().fold(f64::INFINITY, f64::min);
    println!("  best of {} random candidates: {:.6}", scores.len(), best);

    // 3. Rendered magnitude
    println!("\n3. Magnitude response (dB):");
    let samples = magnitude_db_samples(&param, &coef, 0.0, 0.5).expect("valid range");
    for i in (0..samples.len()).step_by(100) {
        println!("  ω = {:.4}  {:8.2} dB", samples.omega[i], samples.values[i]);
    }
}
