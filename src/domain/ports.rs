use crate::domain::model::Advertisement;
use crate::utils::error::Result;
use std::io::Write;

/// Produces the current advertisement from some notional origin.
pub trait AdSource {
    fn fetch(&self) -> Result<Advertisement>;
}

/// Consumes an advertisement and writes a single delivery line to the sink.
pub trait AdDestination {
    fn deliver(&self, ad: &Advertisement, out: &mut dyn Write) -> Result<()>;
}

/// Console input seam. The editor and menu flow read replies through this
/// so they can be exercised with scripted input in tests.
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

impl<T: AdSource + ?Sized> AdSource for Box<T> {
    fn fetch(&self) -> Result<Advertisement> {
        (**self).fetch()
    }
}

impl<T: AdDestination + ?Sized> AdDestination for Box<T> {
    fn deliver(&self, ad: &Advertisement, out: &mut dyn Write) -> Result<()> {
        (**self).deliver(ad, out)
    }
}
