use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use x86_rs::{fmt_instruction, Bitness, Decoder, DecoderOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode hex-encoded x86 bytes, e.g. `x86-decode 48 01 d8`")]
struct Opts {
    /// 16, 32 or 64
    #[arg(short, long, default_value_t = 64)]
    bitness: u32,
    /// Address of the first byte (hex or dec)
    #[arg(long, default_value = "0")]
    ip: String,
    /// Skip reserved-bit checks
    #[arg(long)]
    lenient: bool,
    /// Emit JSON instead of a text listing
    #[arg(long)]
    json: bool,
    /// Hex bytes; whitespace between bytes is optional
    #[arg(value_name = "HEX", required = true)]
    bytes: Vec<String>,
}

fn parse_hex_bytes(parts: &[String]) -> Result<Vec<u8>> {
    let digits: String = parts.iter().flat_map(|p| p.chars()).filter(|c| !c.is_whitespace()).collect();
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        bail!("bad hex digit `{bad}`");
    }
    if digits.len() % 2 != 0 {
        bail!("odd number of hex digits");
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).with_context(|| format!("bad hex byte `{}`", &digits[i..i + 2])))
        .collect()
}

fn parse_u64(s: &str) -> Result<u64> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u64::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u64>()?)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let opts = Opts::parse();
    let bitness = Bitness::from_bits(opts.bitness).with_context(|| format!("unsupported bitness {}", opts.bitness))?;
    let data = parse_hex_bytes(&opts.bytes)?;
    let options = if opts.lenient { DecoderOptions::NO_INVALID_CHECK } else { DecoderOptions::empty() };

    let decoder = Decoder::new(bitness, &data, parse_u64(&opts.ip)?, options);
    if opts.json {
        let instructions: Vec<_> = decoder.collect();
        println!("{}", serde_json::to_string_pretty(&instructions)?);
        return Ok(());
    }
    let mut offset = 0usize;
    for instr in decoder {
        let len = instr.len as usize;
        let bytes: Vec<String> = data[offset..offset + len].iter().map(|b| format!("{b:02x}")).collect();
        println!("{:#010x}: {:<30} {}", instr.ip, bytes.join(" "), fmt_instruction(&instr));
        offset += len;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_bytes_with_and_without_spaces() {
        let parts = vec!["48 01".to_string(), "d8".to_string()];
        assert_eq!(parse_hex_bytes(&parts).unwrap(), vec![0x48, 0x01, 0xd8]);
        assert_eq!(parse_hex_bytes(&["c3".to_string()]).unwrap(), vec![0xc3]);
        assert!(parse_hex_bytes(&["123".to_string()]).is_err());
        assert!(parse_hex_bytes(&["zz".to_string()]).is_err());
    }

    #[test]
    fn non_ascii_input_is_an_error() {
        let err = parse_hex_bytes(&["a\u{e9}b".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "bad hex digit `\u{e9}`");
        assert!(parse_hex_bytes(&["c3\u{e9}".to_string()]).is_err());
    }

    #[test]
    fn ip_hex_and_dec() {
        assert_eq!(parse_u64("0x1000").unwrap(), 0x1000);
        assert_eq!(parse_u64("16").unwrap(), 16);
    }
}
