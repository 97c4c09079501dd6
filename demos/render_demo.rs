//! Render the full plot set for a fabricated refinement training run.
//!
//! ```bash
//! cargo run --example render_demo
//! ```
//!
//! Writes PNGs and the manifest into `demo_output/plots/`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use refinar::config::PlotSpec;
use refinar::dataset::{JetDataset, JetRecord, Partition};
use refinar::loss::{LossLog, Split};
use refinar::plot::PlotterManager;

const SPEC_YAML: &str = r#"
variables:
  - name: pt
    branch: RecJet_pt_CLASS
    title: "Jet p_T [GeV]"
    bins: [40, 0.0, 200.0]
    ratio_range: 0.3
  - name: nconst
    branch: RecJet_nconst_CLASS
    title: "Jet constituents"
    bins: [0.0, 5.0, 10.0, 15.0, 20.0, 30.0, 50.0]
correlation_variables:
  - name: pt
    branch: RecJet_pt_CLASS
  - name: nconst
    branch: RecJet_nconst_CLASS
  - name: mass
    branch: RecJet_mass_CLASS
primary_loss: mse
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(42);

    // Fabricate a jet snapshot: FastSim smears FullSim, Refined undoes most of it.
    let jets = (0..5000)
        .map(|i| {
            let partition = match i % 5 {
                0 => Partition::Test,
                1 => Partition::Validation,
                _ => Partition::Train,
            };
            let pt: f64 = rng.gen_range(10.0..190.0);
            let nconst = (pt / 4.0 + rng.gen_range(-3.0..3.0)).clamp(1.0, 49.0);
            let mass = 0.08 * pt + rng.gen_range(-1.5..1.5);
            let smear: f64 = rng.gen_range(0.85..1.15);
            JetRecord::new(
                partition,
                [
                    ("RecJet_pt_FullSim", pt),
                    ("RecJet_pt_FastSim", pt * smear),
                    ("RecJet_pt_Refined", pt * (0.8 + 0.2 * smear)),
                    ("RecJet_nconst_FullSim", nconst),
                    ("RecJet_nconst_FastSim", (nconst * smear).max(1.0)),
                    ("RecJet_nconst_Refined", nconst),
                    ("RecJet_mass_FullSim", mass),
                    ("RecJet_mass_FastSim", mass * smear),
                    ("RecJet_mass_Refined", mass * (0.9 + 0.1 * smear)),
                ],
            )
        })
        .collect();
    let dataset = JetDataset::from_jets(jets);

    // Fabricate a converging loss log with per-batch noise.
    let mut loss_log = LossLog::new();
    loss_log.set_primary("mse");
    for epoch in 0..25u32 {
        let base = 0.2 + 1.0 / f64::from(epoch + 1);
        for _ in 0..32 {
            loss_log.record("mse", Split::Train, epoch, base + rng.gen_range(0.0..0.2));
            loss_log.record("mmd", Split::Train, epoch, 1.5 * base + rng.gen_range(0.0..0.3));
        }
        for _ in 0..8 {
            loss_log.record("mse", Split::Validation, epoch, base + 0.1 + rng.gen_range(0.0..0.2));
            loss_log.record("mmd", Split::Validation, epoch, 1.5 * base + 0.1 + rng.gen_range(0.0..0.3));
        }
    }

    let spec: PlotSpec = serde_yaml::from_str(SPEC_YAML)?;
    let manager = PlotterManager::new(spec, "demo_output".as_ref(), "demo")?;
    let report = manager.plot_all(&dataset, Some(&loss_log))?;

    for file in &report.files {
        println!("Saved: {}", file.display());
    }
    println!("✓ {} plots generated", report.files.len());
    Ok(())
}
