use crate::core::error::Result;
use crate::features::reports::LinkOpener;

/// Prints links for the user to follow
#[derive(Debug, Default)]
pub struct PrintLinkOpener;

impl LinkOpener for PrintLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        println!("{}", url);
        Ok(())
    }
}
