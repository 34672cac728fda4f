use lab_circuits::bode::{BodeOptions, BodePlot};
use lab_circuits::filters::{FrequencyResponse, RlcBandpass};
use lab_circuits::sweep::{bode_dataset, logspace_hz};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Series RLC bandpass example.
    let filter = RlcBandpass::new(50.0, 1e-6, 1e-9); // 50 Ω, 1 µH, 1 nF
    let f0 = filter.characteristic_frequency();
    println!("center frequency: {f0:.6e} Hz");

    let freqs = logspace_hz(f0 / 100.0, f0 * 100.0, 81);
    println!("f(Hz), gain, phase(deg)");
    for p in lab_circuits::sweep::frequency_sweep(&filter, freqs.iter().copied()) {
        println!("{:.6e}, {:.6e}, {:.3}", p.frequency_hz, p.gain, p.phase_rad.to_degrees());
    }

    let data = bode_dataset(&filter, &freqs)?;
    let options = BodeOptions {
        title: String::from("Series RLC bandpass"),
        ..BodeOptions::default()
    };
    let svg = BodePlot::new(data, options).render_svg()?;
    std::fs::write("bode_sweep.svg", svg)?;
    println!("wrote bode_sweep.svg");
    Ok(())
}
