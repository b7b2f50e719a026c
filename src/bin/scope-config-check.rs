//! # Tenant Scope Configuration Checker
//!
//! Validates tenant scope configuration files before they are deployed, using
//! the same loader the library uses at startup.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin scope-config-check config/scope.json
//! cargo run --bin scope-config-check config/scope.json "Globex LLC"
//! ```
//!
//! The optional second argument is an organization name; the checker prints
//! which tenant an identifier-less principal from that organization would
//! resolve to.
//!
//! ## Output Example
//!
//! ```text
//! Checking scope configuration: config/scope.json
//! ✓ Configuration is valid!
//!
//! Configuration Summary:
//!   Default tenant: 1
//!   Admin capability: admin
//!   Organization overrides: 1
//!     - Globex LLC -> 4
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Configuration is valid
//! - `1`: Configuration is invalid or could not be read

use std::env;
use std::path::Path;
use std::process;
use tenant_scope::{Principal, ScopeConfig, TenantResolver, TenantScopeResolver};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config-file> [organization-name]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} config/scope.json", args[0]);
        eprintln!("  {} config/scope.json \"Globex LLC\"", args[0]);
        process::exit(1);
    }

    let path = Path::new(&args[1]);
    println!("Checking scope configuration: {}", path.display());

    let config = match ScopeConfig::from_path(path) {
        Ok(config) => {
            println!("✓ Configuration is valid!");
            config
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    };

    print_summary(&config);

    if let Some(organization) = args.get(2) {
        let resolver = TenantScopeResolver::new(config);
        let principal = Principal::anonymous().with_organization(organization.as_str());
        let context = resolver.resolve_context(&principal);
        println!();
        println!(
            "Organization '{}' resolves to tenant {} ({:?})",
            organization, context.effective_tenant_id, context.source
        );
    }
}

fn print_summary(config: &ScopeConfig) {
    println!();
    println!("Configuration Summary:");
    println!("  Default tenant: {}", config.default_tenant_id);
    println!("  Admin capability: {}", config.admin_capability);
    println!(
        "  Organization overrides: {}",
        config.organization_tenants.len()
    );
    for (name, tenant_id) in &config.organization_tenants {
        println!("    - {} -> {}", name, tenant_id);
    }
}
