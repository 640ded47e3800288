use crate::core::{AdDestination, AdSource, Advertisement, Result};
use std::io::Write;

/// Composes one source and one destination and runs the
/// fetch-render-deliver sequence.
pub struct AdHandler<S: AdSource, D: AdDestination> {
    source: S,
    destination: D,
}

impl<S: AdSource, D: AdDestination> AdHandler<S, D> {
    pub fn new(source: S, destination: D) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn fetch(&self) -> Result<Advertisement> {
        self.source.fetch()
    }

    /// Fetches the current advertisement and processes it.
    pub fn process(&self, out: &mut dyn Write) -> Result<()> {
        let ad = self.source.fetch()?;
        self.process_ad(&ad, out)
    }

    /// Renders the given advertisement and delivers it. The caller keeps
    /// ownership, so an edited ad is delivered as edited rather than being
    /// re-fetched from the source.
    pub fn process_ad(&self, ad: &Advertisement, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Anúncio:")?;
        writeln!(out, "Título: {}", ad.title)?;
        writeln!(out, "Mensagem: {}", ad.message)?;
        writeln!(out)?;

        self.destination.deliver(ad, out)
    }
}
