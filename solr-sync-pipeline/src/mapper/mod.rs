//! Document mapper.
//!
//! Pure transformation from a typed record into its Solr document. One
//! mapping function per resource type over a shared identity helper; the
//! same record always yields the same document, and no mapping can fail.

use solr_sync_shared::{BookRecord, ElectronicRecord, Record, ResourceType, SolrDocument};

/// Map a record to its Solr document.
pub fn to_document(record: &Record) -> SolrDocument {
    match record {
        Record::Book(book) => book_document(book),
        Record::Electronic(electronic) => electronic_document(electronic),
    }
}

/// Compose the identity fields shared by every resource type.
///
/// `id` and `sku` are always `"{prefix}-{id}"`, `type_s` carries the
/// resource-type discriminator, and `cat` is the faceting category array.
fn base_document(resource: ResourceType, id: i64) -> SolrDocument {
    let unique_id = format!("{}-{}", resource.prefix(), id);

    let mut doc = SolrDocument::new();
    doc.set_str("id", unique_id.clone())
        .set_str("sku", unique_id)
        .set_str("type_s", resource.prefix())
        .set_str_array("cat", &[resource.collection()]);
    doc
}

fn book_document(book: &BookRecord) -> SolrDocument {
    let mut doc = base_document(ResourceType::Book, book.id);
    doc.set_str("name", book.title.clone())
        .set_str("author_s", book.author.clone())
        .set_str("genre_s", book.genre.clone())
        .set_f64("price", book.price)
        .set_bool("inStock", book.in_stock)
        .set_str("isbn_s", book.isbn.clone())
        .set_str("description", book.description.clone());
    doc
}

fn electronic_document(electronic: &ElectronicRecord) -> SolrDocument {
    let mut doc = base_document(ResourceType::Electronics, electronic.id);
    // Manufacturer appears twice: `manu` for display, `manufacturer_s` for
    // faceting.
    doc.set_str("name", electronic.name.clone())
        .set_str("manu", electronic.manufacturer.clone())
        .set_str("manufacturer_s", electronic.manufacturer.clone())
        .set_f64("price", electronic.price)
        .set_bool("inStock", electronic.in_stock)
        .set_str("description", electronic.description.clone())
        .set_str("specs_txt", electronic.specs.clone());
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn dune() -> BookRecord {
        BookRecord {
            id: 42,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: "SciFi".to_string(),
            price: 9.99,
            in_stock: true,
            isbn: "123".to_string(),
            // A NULL description arrives already coalesced by the store.
            description: String::new(),
            updated_at: Utc::now(),
        }
    }

    fn radio() -> ElectronicRecord {
        ElectronicRecord {
            id: 7,
            name: "Shortwave Radio".to_string(),
            manufacturer: "Acme".to_string(),
            price: 129.5,
            in_stock: false,
            specs: "{\"bands\":3}".to_string(),
            description: "Portable receiver".to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_book_document_fields() {
        let doc = to_document(&Record::Book(dune()));

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "book-42",
                "sku": "book-42",
                "type_s": "book",
                "cat": ["books"],
                "name": "Dune",
                "author_s": "Herbert",
                "genre_s": "SciFi",
                "price": 9.99,
                "inStock": true,
                "isbn_s": "123",
                "description": "",
            })
        );
    }

    #[test]
    fn test_electronic_document_fields() {
        let doc = to_document(&Record::Electronic(radio()));

        assert_eq!(doc.get("id").unwrap(), "electronics-7");
        assert_eq!(doc.get("sku").unwrap(), "electronics-7");
        assert_eq!(doc.get("type_s").unwrap(), "electronics");
        assert_eq!(doc.get("cat").unwrap(), &json!(["electronics"]));
        assert_eq!(doc.get("name").unwrap(), "Shortwave Radio");
        // Manufacturer under both names.
        assert_eq!(doc.get("manu").unwrap(), "Acme");
        assert_eq!(doc.get("manufacturer_s").unwrap(), "Acme");
        assert_eq!(doc.get("inStock").unwrap(), false);
        assert_eq!(doc.get("specs_txt").unwrap(), "{\"bands\":3}");
    }

    #[test]
    fn test_id_always_equals_sku() {
        for record in [Record::Book(dune()), Record::Electronic(radio())] {
            let doc = to_document(&record);
            let expected = format!("{}-{}", record.resource_type().prefix(), record.id());
            assert_eq!(doc.get("id").unwrap(), expected.as_str());
            assert_eq!(doc.get("sku").unwrap(), expected.as_str());
        }
    }

    #[test]
    fn test_no_field_is_null() {
        for record in [Record::Book(dune()), Record::Electronic(radio())] {
            let doc = to_document(&record);
            assert!(doc.iter().all(|(_, v)| !v.is_null()));
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let record = Record::Book(dune());
        assert_eq!(to_document(&record), to_document(&record));
    }

    #[test]
    fn test_in_stock_maps_to_boolean() {
        let mut book = dune();

        book.in_stock = false;
        let doc = to_document(&Record::Book(book.clone()));
        assert_eq!(doc.get("inStock").unwrap(), false);

        book.in_stock = true;
        let doc = to_document(&Record::Book(book));
        assert_eq!(doc.get("inStock").unwrap(), true);
    }
}
