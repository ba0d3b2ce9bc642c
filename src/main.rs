use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wordclock_wiring::{Config, Wiring};

#[derive(Parser, Debug)]
#[command(name = "wordclock-wiring")]
#[command(about = "Map word clock positions to LED strip indices")]
#[command(version)]
struct Cli {
    /// Read configuration from this file instead of ~/.config/wordclock/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show display geometry and strip settings
    #[arg(long)]
    status: bool,

    /// Print the full layout table
    #[arg(long)]
    dump: bool,

    /// Strip index of a grid coordinate
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    xy: Option<Vec<usize>>,

    /// Strip indices of linear positions (top-left to bottom-right)
    #[arg(long, num_args = 1.., value_name = "INDEX")]
    linear: Option<Vec<usize>>,

    /// Strip index of a minute marker (1-4)
    #[arg(long, value_name = "MINUTE")]
    minute: Option<u8>,

    /// Print answers as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for answers
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let wiring = Wiring::from_config(&config)?;

    let mut answered = false;

    if let Some(xy) = cli.xy.as_deref() {
        if let [x, y] = *xy {
            let index = wiring.index_from_2d(x, y)?;
            print_answer(
                cli.json,
                serde_json::json!({ "x": x, "y": y, "index": index }),
                format!("({}, {}) -> {}", x, y, index),
            )?;
            answered = true;
        }
    }

    if let Some(positions) = cli.linear.as_deref() {
        for &position in positions {
            let index = wiring.index_from_1d(position)?;
            print_answer(
                cli.json,
                serde_json::json!({ "position": position, "index": index }),
                format!("{} -> {}", position, index),
            )?;
        }
        answered = true;
    }

    if let Some(minute) = cli.minute {
        let index = wiring.index_from_minute(minute)?;
        print_answer(
            cli.json,
            serde_json::json!({ "minute": minute, "index": index }),
            format!("minute {} -> {}", minute, index),
        )?;
        answered = true;
    }

    if cli.dump {
        if cli.json {
            let rows: Vec<&[usize]> = wiring.layout().rows().collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            print!("{}", wiring.layout());
        }
        answered = true;
    }

    if cli.status || !answered {
        print_status(&config, &wiring, cli.json)?;
    }

    Ok(())
}

fn print_answer(json: bool, value: serde_json::Value, text: String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn print_status(config: &Config, wiring: &Wiring, json: bool) -> Result<()> {
    info!(
        "Language '{}' with {} wiring",
        config.stencil.language,
        wiring.wiring_layout()
    );

    if json {
        let status = serde_json::json!({
            "language": config.stencil.language,
            "wiring_layout": wiring.wiring_layout(),
            "width": wiring.width(),
            "height": wiring.height(),
            "led_count": wiring.led_count(),
            "strip_length": wiring.strip_length(),
            "strip": config.strip,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let strip = &config.strip;
    println!("Wiring configuration");
    println!("  Width:        {}", wiring.width());
    println!("  Height:       {}", wiring.height());
    println!("  Num of LEDs:  {}", wiring.led_count());
    println!("  Strip length: {}", wiring.strip_length());
    println!("  Pin:          {}", strip.pin);
    println!("  Frequency:    {} Hz", strip.freq_hz);
    println!("  DMA channel:  {}", strip.dma);
    println!("  Invert:       {}", strip.invert);
    Ok(())
}
