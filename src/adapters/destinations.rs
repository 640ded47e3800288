use crate::domain::model::Advertisement;
use crate::domain::ports::AdDestination;
use crate::utils::error::Result;
use std::io::Write;

// Each channel differs only in the label of its delivery line. The exact
// wording is a compatibility contract pinned by the integration tests.

#[derive(Debug, Clone, Default)]
pub struct WhatsAppDestination;

impl AdDestination for WhatsAppDestination {
    fn deliver(&self, ad: &Advertisement, out: &mut dyn Write) -> Result<()> {
        tracing::debug!("Delivering advertisement via WhatsApp");
        writeln!(out, "Sending ad to WhatsApp: {} - {}", ad.title, ad.message)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SmsDestination;

impl AdDestination for SmsDestination {
    fn deliver(&self, ad: &Advertisement, out: &mut dyn Write) -> Result<()> {
        tracing::debug!("Delivering advertisement via SMS");
        writeln!(out, "Sending SMS: {} - {}", ad.title, ad.message)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FacebookDestination;

impl AdDestination for FacebookDestination {
    fn deliver(&self, ad: &Advertisement, out: &mut dyn Write) -> Result<()> {
        tracing::debug!("Delivering advertisement via Facebook");
        writeln!(out, "Sending ad to Facebook: {} - {}", ad.title, ad.message)?;
        Ok(())
    }
}
