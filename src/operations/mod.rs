// Operations module
// Project persistence and member discovery

pub mod discover;
pub mod save;
pub mod xml_include;

pub use discover::{DiscoveredMember, MemberScanner};
pub use save::ProjectWriter;
pub use xml_include::add_xml_file_to_writer;
