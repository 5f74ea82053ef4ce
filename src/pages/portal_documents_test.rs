use super::*;

fn document(name: &str, category: DocumentCategory) -> Document {
    Document {
        file: format!("{name}.pdf"),
        name: name.to_owned(),
        category,
        uploaded_at: None,
    }
}

#[test]
fn documents_group_in_declaration_order() {
    let grouped = group_documents(vec![
        document("stk", DocumentCategory::TechnicalInspection),
        document("smlouva", DocumentCategory::Contract),
        document("neznamy", DocumentCategory::Other),
    ]);
    let categories: Vec<DocumentCategory> = grouped.iter().map(|(c, _)| *c).collect();
    assert_eq!(
        categories,
        vec![
            DocumentCategory::Contract,
            DocumentCategory::TechnicalInspection,
            DocumentCategory::Other,
        ]
    );
}

#[test]
fn empty_categories_are_omitted() {
    let grouped = group_documents(vec![document("smlouva", DocumentCategory::Contract)]);
    assert_eq!(grouped.len(), 1);
}

#[test]
fn documents_of_one_category_stay_together() {
    let grouped = group_documents(vec![
        document("smlouva-1", DocumentCategory::Contract),
        document("smlouva-2", DocumentCategory::Contract),
    ]);
    assert_eq!(grouped[0].1.len(), 2);
}
