use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::fmt::Write as _;
use std::path::Path;

use x86_disasm::{disassemble_range, load_raw_bin, ListingLine};
use x86_rs::{Bitness, DecoderOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "x86/x64 disassembler CLI", long_about=None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value = "0")]
    base: String,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Code bitness: 16, 32 or 64
    #[arg(long, default_value_t = 64)]
    bitness: u32,
    /// Skip reserved-bit and illegal-combination checks
    #[arg(long)]
    lenient: bool,
    /// AMD rules for 66h on near branches in 64-bit mode
    #[arg(long)]
    amd: bool,
    /// Decode 0F 1A/1B as MPX instead of reserved nops
    #[arg(long)]
    mpx: bool,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections,
    /// Disassemble a range [start, end) in bytes
    Range {
        /// Start address (hex or dec)
        start: String,
        /// End address (hex or dec, exclusive)
        end: String,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_u64(s: &str) -> Result<u64> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u64::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u64>()?)
    }
}

fn decoder_options(cli: &Cli) -> DecoderOptions {
    let mut options = DecoderOptions::empty();
    options.set(DecoderOptions::NO_INVALID_CHECK, cli.lenient);
    options.set(DecoderOptions::AMD, cli.amd);
    options.set(DecoderOptions::MPX, cli.mpx);
    options
}

fn render_text(lines: &[ListingLine], show_bytes: bool) -> String {
    let mut buf = String::new();
    for line in lines {
        let _ = write!(buf, "{:#010x}: ", line.addr);
        if show_bytes {
            let hex: Vec<String> = line.bytes.iter().map(|b| format!("{b:02x}")).collect();
            let _ = write!(buf, "{:<30} ", hex.join(" "));
        }
        let _ = writeln!(buf, "{}", line.text);
    }
    buf
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let bitness = Bitness::from_bits(cli.bitness).with_context(|| format!("unsupported bitness {}", cli.bitness))?;
    let img = load_raw_bin(Path::new(&cli.input), parse_u64(&cli.base)?, cli.skip, cli.len)?;

    match &cli.cmd {
        Command::Sections => {
            println!("{:<10} {:<18} {:<18} {:<6} {:<6}", "name", "start", "end", "perms", "kind");
            for s in &img.segments {
                println!("{:<10} {:#018x} {:#018x} {:<6} {:<6}", s.name, s.base, s.end(), s.perms, s.kind);
            }
        }
        Command::Range { start, end, show_bytes, format, out } => {
            let start = parse_u64(start)?;
            let end = parse_u64(end)?;
            anyhow::ensure!(end >= start, "end must be >= start");

            let lines = disassemble_range(&img, start, end, bitness, decoder_options(&cli));
            let rendered = match format {
                OutputFormat::Text => render_text(&lines, *show_bytes),
                OutputFormat::Json => serde_json::to_string_pretty(&lines)?,
            };
            if let Some(path) = out {
                std::fs::write(path, rendered)?;
            } else {
                print!("{rendered}");
                if matches!(format, OutputFormat::Json) {
                    println!();
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use x86_disasm::{Image, Segment};

    #[test]
    fn parse_u64_hex_and_dec() {
        assert_eq!(parse_u64("0x10").unwrap(), 0x10);
        assert_eq!(parse_u64("16").unwrap(), 16);
        assert!(parse_u64("zz").is_err());
    }

    #[test]
    fn text_listing_with_bytes() {
        let seg = Segment { name: "s".into(), base: 0, bytes: vec![0xc3], perms: "r-x", kind: "raw" };
        let img = Image { segments: vec![seg] };
        let lines = disassemble_range(&img, 0, 1, Bitness::Bits64, DecoderOptions::empty());
        let text = render_text(&lines, true);
        assert!(text.starts_with("0x00000000: c3"));
        assert!(text.trim_end().ends_with("Retnq"));
    }
}
