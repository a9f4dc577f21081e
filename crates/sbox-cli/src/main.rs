//! Command-line interface for S-box generation and analysis.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sbox_analysis::{difference_distribution_table, differential_uniformity};
use sbox_gen::{generate_sbox, SBox};

/// AES S-box derivation and analysis CLI.
#[derive(Parser)]
#[command(
    name = "sboxc",
    version,
    author,
    about = "Derive the AES S-box from GF(2^8) arithmetic and analyze it"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the generated S-box as a 16x16 hex grid.
    Table {
        /// Print the table as a single 512-character hex string instead.
        #[arg(long, default_value_t = false)]
        compact: bool,
    },
    /// Regenerate the table and check it against the published values.
    Verify,
    /// Compute differential-uniformity metrics for the generated table.
    Analyze {
        /// Also print a summary of the difference distribution table.
        #[arg(long, default_value_t = false)]
        ddt: bool,
    },
    /// Serialize the generated table to a file.
    Export {
        /// Output path for the serialized table.
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Table { compact } => cmd_table(compact),
        Commands::Verify => cmd_verify(),
        Commands::Analyze { ddt } => cmd_analyze(ddt),
        Commands::Export { out } => cmd_export(&out),
    }
}

fn cmd_table(compact: bool) -> Result<()> {
    let sbox = generate_sbox();
    if compact {
        println!("{}", hex::encode(sbox));
        return Ok(());
    }

    let header: Vec<String> = (0..16).map(|col| format!("{col:02x}")).collect();
    println!("    {}", header.join(" "));
    for row in 0..16 {
        let cells: Vec<String> = sbox[row * 16..(row + 1) * 16]
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();
        println!("{:x}0  {}", row, cells.join(" "));
    }
    Ok(())
}

fn cmd_verify() -> Result<()> {
    let sbox = generate_sbox();

    const KNOWN: [(u8, u8); 3] = [(0x00, 0x63), (0x01, 0x7c), (0x53, 0xed)];
    for (input, expected) in KNOWN {
        let actual = sbox[input as usize];
        if actual != expected {
            bail!("sbox[{input:#04x}] = {actual:#04x}, expected {expected:#04x}");
        }
    }
    println!("known values: ok");

    let mut seen = [false; 256];
    for &value in sbox.iter() {
        if seen[value as usize] {
            bail!("table is not a bijection: {value:#04x} appears twice");
        }
        seen[value as usize] = true;
    }
    println!("bijection: ok");

    let delta = differential_uniformity(&sbox);
    if delta != 4 {
        bail!("differential uniformity is {delta}, expected 4");
    }
    println!("differential uniformity: 4 (ok)");
    Ok(())
}

fn cmd_analyze(with_ddt: bool) -> Result<()> {
    let sbox = generate_sbox();
    let delta = differential_uniformity(&sbox);
    println!("differential uniformity: {delta}");

    if with_ddt {
        let ddt = difference_distribution_table(&sbox);
        // Histogram of DDT cell values over the nontrivial rows.
        let mut by_count = [0u32; 257];
        for row in ddt.iter().skip(1) {
            for &cell in row.iter() {
                by_count[cell as usize] += 1;
            }
        }
        println!("ddt cell distribution (rows with nonzero input difference):");
        for (value, occurrences) in by_count.iter().enumerate() {
            if *occurrences > 0 {
                println!("  count {value:>3}: {occurrences} cells");
            }
        }
    }
    Ok(())
}

fn cmd_export(out: &PathBuf) -> Result<()> {
    let sbox = SBox::generate();
    let bytes = sbox.to_bytes().context("serialize table")?;
    fs::write(out, &bytes).with_context(|| format!("write {}", out.display()))?;
    println!("wrote {} bytes to {}", bytes.len(), out.display());
    Ok(())
}
