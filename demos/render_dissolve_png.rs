use std::path::PathBuf;

use segue::{AlphaDissolve, DissolveMode, Effect, Frame, Rgba8Premul};

fn checker(width: u32, height: u32, a: Rgba8Premul, b: Rgba8Premul) -> anyhow::Result<Frame> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let px = if ((x / 32) + (y / 32)) % 2 == 0 { a } else { b };
            data.extend_from_slice(&px.to_array());
        }
    }
    Ok(Frame::from_rgba8_premul(width, height, data)?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mode = match std::env::args().nth(1).as_deref() {
        Some("over") => DissolveMode::Over,
        Some("weighted") | None => DissolveMode::Weighted,
        Some(other) => anyhow::bail!("unknown mode '{other}', expected 'weighted' or 'over'"),
    };

    let source = checker(
        256,
        256,
        Rgba8Premul::opaque(230, 60, 90),
        Rgba8Premul::opaque(20, 20, 30),
    )?;
    let destination = checker(
        256,
        256,
        Rgba8Premul::opaque(40, 160, 220),
        Rgba8Premul::from_straight_rgba(250, 240, 200, 128),
    )?;

    let effect = AlphaDissolve::new(mode);
    let out_dir = PathBuf::from("target").join("demos");
    std::fs::create_dir_all(&out_dir)?;

    for (i, p) in [0.0f32, 0.25, 0.5, 0.75, 1.0].into_iter().enumerate() {
        let frame = effect.render(&source, &destination, p)?;
        let path = out_dir.join(format!("dissolve_{i}.png"));
        frame.to_rgba_image()?.save(&path)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
