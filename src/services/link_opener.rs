//! Outbound link handling.
//!
//! Opening a bookmark asks a [`LinkOpener`] to show the URL in a new browsing
//! context. [`SystemOpener`] hands it to the OS default browser; tests and
//! headless sessions use [`LogOnlyOpener`] or their own recorder.

use crate::types::errors::OpenError;

/// Trait defining the fire-and-forget "open this URL" side channel.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<(), OpenError>;
}

/// Opens links with the platform's default browser.
#[derive(Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    #[cfg(feature = "browser")]
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        open::that_detached(url).map_err(|e| OpenError::LaunchFailed(e.to_string()))?;
        log::info!("Opened {}", url);
        Ok(())
    }

    #[cfg(not(feature = "browser"))]
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        Err(OpenError::LaunchFailed(format!(
            "built without browser support, cannot open {}",
            url
        )))
    }
}

/// Records nothing and opens nothing; the request only reaches the log.
#[derive(Debug, Default)]
pub struct LogOnlyOpener;

impl LinkOpener for LogOnlyOpener {
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        log::info!("Open requested for {} (link opening disabled)", url);
        Ok(())
    }
}

impl<O: LinkOpener + ?Sized> LinkOpener for Box<O> {
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        (**self).open(url)
    }
}

/// Picks the opener for the `open_links` setting.
pub fn opener_for(open_links: bool) -> Box<dyn LinkOpener> {
    if open_links {
        Box::new(SystemOpener)
    } else {
        Box::new(LogOnlyOpener)
    }
}
