mod site_content;
pub use site_content::*;
