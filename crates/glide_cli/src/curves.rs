//! Easing curve tables

use anyhow::Result;
use glide_animation::Easing;
use std::io::Write;

/// Print `samples` evenly spaced points of each curve, one row per `x`
pub fn write_table(curves: &[Easing], samples: usize, out: &mut impl Write) -> Result<()> {
    if samples < 2 {
        anyhow::bail!("need at least 2 samples, got {samples}");
    }

    write!(out, "{:>6}", "x")?;
    for easing in curves {
        write!(out, " {:>15}", easing.name())?;
    }
    writeln!(out)?;

    for i in 0..samples {
        let x = i as f32 / (samples - 1) as f32;
        write!(out, "{x:>6.3}")?;
        for easing in curves {
            write!(out, " {:>15.6}", easing.apply(x))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

pub fn write_names(out: &mut impl Write) -> Result<()> {
    for easing in Easing::ALL {
        writeln!(out, "{easing}")?;
    }
    Ok(())
}
