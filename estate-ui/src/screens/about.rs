use super::heading;

pub struct AboutScreen;

impl AboutScreen {
    pub const TITLE: &'static str = "About";

    pub fn show() -> String {
        format!(
            "{}Real Estate Finance Calculator\n\
             \n\
             Version {}\n\
             Provides mortgage, affordability, ROI,\n\
             property comparison, and amortization tools.\n",
            heading(Self::TITLE),
            env!("CARGO_PKG_VERSION"),
        )
    }
}
