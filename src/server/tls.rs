//! TLS context construction
//!
//! Loads the certificate chain, private key and DH parameter files from the
//! configured certs directory and builds the acceptor the listener wraps
//! every connection with. Any failure here is fatal to startup.

use anyhow::{Context, Result, bail};
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tokio_rustls::TlsAcceptor;

/// Certificate chain file expected under the certs directory.
pub const CERT_FILE: &str = "server.pem";

/// PEM private key file expected under the certs directory.
pub const KEY_FILE: &str = "key.pem";

/// Diffie-Hellman parameter file expected under the certs directory.
pub const DH_PARAMS_FILE: &str = "dh2048.pem";

/// Builds the TLS acceptor from the material under `certs_dir`.
///
/// rustls only speaks TLS 1.2 and 1.3, so legacy SSL/TLS 1.0 are disabled
/// by construction.
pub fn build_acceptor(certs_dir: &Path) -> Result<TlsAcceptor> {
    let certs = load_certs(&certs_dir.join(CERT_FILE))?;
    let key = load_private_key(&certs_dir.join(KEY_FILE))?;
    check_dh_params(&certs_dir.join(DH_PARAMS_FILE))?;

    let config = rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .context("Invalid certificate chain or private key")?;

    Ok(TlsAcceptor::from(Arc::new(config)))
}

fn load_certs(path: &Path) -> Result<Vec<CertificateDer<'static>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open certificate chain {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut reader)
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to parse certificate chain {}", path.display()))?;

    if certs.is_empty() {
        bail!("No certificates found in {}", path.display());
    }

    Ok(certs)
}

fn load_private_key(path: &Path) -> Result<PrivateKeyDer<'static>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open private key {}", path.display()))?;
    let mut reader = BufReader::new(file);

    rustls_pemfile::private_key(&mut reader)
        .with_context(|| format!("Failed to parse private key {}", path.display()))?
        .with_context(|| format!("No private key found in {}", path.display()))
}

/// Validates the DH parameter file. rustls negotiates its own (elliptic
/// curve) key exchange and cannot consume classic DH parameters, so the
/// file is checked for well-formedness only; a missing or malformed file
/// still fails startup.
fn check_dh_params(path: &Path) -> Result<()> {
    let pem = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open DH parameters {}", path.display()))?;

    if !pem.contains("BEGIN DH PARAMETERS") {
        bail!("No DH parameters found in {}", path.display());
    }

    Ok(())
}
