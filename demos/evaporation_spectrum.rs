use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use yamc_ndl::{CoherentElastic, GeneralEvaporation, XssArray};

const RECORD: &str = include_str!("../tests/data/evaporation_record.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== General Evaporation and Bragg Scattering ===");

    let record = XssArray::from_json(RECORD)?;
    let evaporation = GeneralEvaporation::from_record(&record, 0)?;
    let coherent = CoherentElastic::from_record(&record, 21)?;

    let mut rng = StdRng::seed_from_u64(42);
    let e_in = 14e6; // 14 MeV
    let t = evaporation.temperature().evaluate(e_in);
    println!("\nNuclear temperature at {:.1e} eV: {:.3e} eV", e_in, t);

    let n_bins = 12;
    let upper = evaporation.bin_bounds()[evaporation.bin_bounds().len() - 1] * t;
    let mut histogram = vec![0usize; n_bins];
    let n_samples = 100_000;
    for _ in 0..n_samples {
        let e_out = evaporation.sample_energy(e_in, || rng.gen());
        let bin = ((e_out / upper * n_bins as f64) as usize).min(n_bins - 1);
        histogram[bin] += 1;
    }

    println!("\nOutgoing energy histogram ({} samples):", n_samples);
    for (i, count) in histogram.iter().enumerate() {
        let lo = upper * i as f64 / n_bins as f64;
        let bar = "#".repeat(count * 200 / n_samples);
        println!("  {:>9.3e} eV | {}", lo, bar);
    }

    println!("\nCoherent elastic cross section:");
    for e in [1.0e-3, 2.0e-3, 4.0e-3, 6.0e-3, 1.0e-2, 1.0e-1] {
        let packet = coherent.sample_angle_energy(e, || rng.gen());
        println!(
            "  E = {:.1e} eV: xs = {:.4} b, mu = {:+.4}",
            e,
            coherent.xs(e),
            packet.cosine_angle
        );
    }

    println!("\n=== Done ===");
    Ok(())
}
