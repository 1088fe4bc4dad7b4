use std::process::ExitCode;

use colored::*;
use utilkit_common::config::Config;
use utilkit_common::validate;

use crate::commands::CheckKind;
use crate::terminal::print;

pub fn check(kind: CheckKind, value: &str, cfg: &Config) -> ExitCode {
    let valid: bool = is_valid(kind, value);

    if cfg.quiet < 2 {
        print::aligned_line("Input", value.to_string());
        print::aligned_line("Kind", label(kind).to_string());
        let verdict: ColoredString = if valid { "valid".green().bold() } else { "invalid".red().bold() };
        print::aligned_line("Result", verdict);
    }

    if valid { ExitCode::SUCCESS } else { ExitCode::from(1) }
}

pub fn is_valid(kind: CheckKind, value: &str) -> bool {
    match kind {
        CheckKind::Domain => validate::is_domain(value),
        CheckKind::Ip => validate::is_ip(value),
        CheckKind::Ipv4 => validate::is_ipv4(value),
        CheckKind::Ipv6 => validate::is_ipv6(value),
        CheckKind::Cidr => validate::is_cidr(value),
        CheckKind::Ipv4Cidr => validate::is_ipv4_cidr(value),
        CheckKind::Ipv6Cidr => validate::is_ipv6_cidr(value),
        CheckKind::Url => validate::is_url(value),
    }
}

fn label(kind: CheckKind) -> &'static str {
    match kind {
        CheckKind::Domain => "domain",
        CheckKind::Ip => "IP address",
        CheckKind::Ipv4 => "IPv4 address",
        CheckKind::Ipv6 => "IPv6 address",
        CheckKind::Cidr => "CIDR block",
        CheckKind::Ipv4Cidr => "IPv4 CIDR block",
        CheckKind::Ipv6Cidr => "IPv6 CIDR block",
        CheckKind::Url => "URL",
    }
}
