//! Breeder record type and its CSV projection

/// One breeder, extracted from a single detail page.
///
/// All fields are plain strings; an empty string means the label was not
/// present on the page. Partially (even completely un-) populated records
/// are valid output.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BreederRecord {
    pub breed: String,
    pub kennel_name: String,
    pub name: String,
    pub experience: String,
    pub location: String,
    pub phone: String,
    pub website: String,
}

impl BreederRecord {
    /// CSV header, in the same order as [`BreederRecord::row`].
    pub const HEADER: [&'static str; 7] = [
        "Breed",
        "Kennel Name",
        "Name",
        "Experience",
        "Location",
        "Phone",
        "Website",
    ];

    /// Assigns a value to the field named by an extracted label.
    ///
    /// The label table is fixed and case-sensitive. Returns `false` for
    /// an unrecognized label, leaving the record untouched; the caller
    /// logs and drops the pair.
    pub fn assign(&mut self, label: &str, value: &str) -> bool {
        let field = match label {
            "Breed(s)" => &mut self.breed,
            "Kennel Name" => &mut self.kennel_name,
            "Breeder Name" => &mut self.name,
            "Breeding for" => &mut self.experience,
            "Breeder's Location" => &mut self.location,
            "Contact By Phone" => &mut self.phone,
            "Website" => &mut self.website,
            _ => return false,
        };
        *field = value.to_string();
        true
    }

    /// Projects the record as a CSV row, in header order.
    pub fn row(&self) -> [&str; 7] {
        [
            &self.breed,
            &self.kennel_name,
            &self.name,
            &self.experience,
            &self.location,
            &self.phone,
            &self.website,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_known_labels() {
        let mut record = BreederRecord::default();
        assert!(record.assign("Breed(s)", "Beagle"));
        assert!(record.assign("Kennel Name", "Sunny Acres"));
        assert!(record.assign("Breeder Name", "Jo Smith"));
        assert!(record.assign("Breeding for", "12 years"));
        assert!(record.assign("Breeder's Location", "Austin, TX"));
        assert!(record.assign("Contact By Phone", "555-0100"));
        assert!(record.assign("Website", "http://example.com"));

        assert_eq!(record.breed, "Beagle");
        assert_eq!(record.kennel_name, "Sunny Acres");
        assert_eq!(record.name, "Jo Smith");
        assert_eq!(record.experience, "12 years");
        assert_eq!(record.location, "Austin, TX");
        assert_eq!(record.phone, "555-0100");
        assert_eq!(record.website, "http://example.com");
    }

    #[test]
    fn test_assign_unknown_label_leaves_record_untouched() {
        let mut record = BreederRecord::default();
        assert!(!record.assign("Vet Name", "Dr. Smith"));
        assert_eq!(record, BreederRecord::default());
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let mut record = BreederRecord::default();
        assert!(!record.assign("breed(s)", "Beagle"));
        assert!(record.breed.is_empty());
    }

    #[test]
    fn test_row_matches_header_order() {
        let mut record = BreederRecord::default();
        record.assign("Breed(s)", "Beagle");
        record.assign("Website", "http://example.com");

        let row = record.row();
        assert_eq!(row.len(), BreederRecord::HEADER.len());
        assert_eq!(row[0], "Beagle");
        assert_eq!(row[6], "http://example.com");
        assert!(row[1..6].iter().all(|f| f.is_empty()));
    }

    #[test]
    fn test_empty_record_row() {
        let record = BreederRecord::default();
        assert!(record.row().iter().all(|f| f.is_empty()));
    }
}
