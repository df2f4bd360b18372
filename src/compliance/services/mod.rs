mod approved_list_parser;
mod csv_rows;
mod ignore_entry_validator;
mod ignore_file_parser;
mod inventory_parser;
mod license_differ;

pub use approved_list_parser::ApprovedListParser;
pub use ignore_entry_validator::IgnoreEntryValidator;
pub use ignore_file_parser::{Groups, IgnoreFileParser, IgnoreGroups};
pub use inventory_parser::InventoryParser;
pub use license_differ::{LicenseDiff, LicenseDiffer, UnapprovedLicense};
