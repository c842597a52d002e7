//! Output page rendering
//!
//! Turns planned [`PageDescriptor`]s into PDF page objects. Drawing order on
//! a page is: drop shadow, images, border stroke.

use crate::layout::{BorderShadow, BorderStroke, DocumentLayout, ImageId, PageDescriptor, Rect};
use crate::types::{ConvertError, Result};
use log::debug;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Render every page of `layout` into `output` and set up the page tree and
/// catalog. `xobjects` maps each placed image to its embedded XObject.
pub fn render_document(
    output: &mut Document,
    layout: &DocumentLayout,
    xobjects: &HashMap<ImageId, ObjectId>,
) -> Result<()> {
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(layout.page_count());

    for (index, page) in layout.pages.iter().enumerate() {
        let page_id = render_page(output, page, xobjects, pages_tree_id)?;
        debug!(
            "Rendered page {} ({}x{}pt, {} image(s))",
            index + 1,
            page.page_rect.width,
            page.page_rect.height,
            page.placements.len()
        );
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(())
}

/// Render one page and return its object id.
///
/// Fails when a placement refers to an image that was never embedded.
pub fn render_page(
    output: &mut Document,
    page: &PageDescriptor,
    xobjects: &HashMap<ImageId, ObjectId>,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page.page_rect.width),
            Object::Real(page.page_rect.height),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut images = Dictionary::new();

    if let Some(shadow) = page.border.as_ref().and_then(|border| border.shadow.as_ref()) {
        content_ops.push(shadow_command(shadow));
    }

    for (idx, placement) in page.placements.iter().enumerate() {
        let xobject_id = xobjects.get(&placement.image.id).ok_or_else(|| {
            ConvertError::Assembly(format!(
                "No embedded image for input {}",
                placement.image.id.0
            ))
        })?;

        let name = format!("Im{}", idx);
        images.set(name.as_bytes(), Object::Reference(*xobject_id));

        if let Some(command) = image_command(&name, &placement.rect) {
            content_ops.push(command);
        }
    }

    if let Some(border) = &page.border {
        content_ops.push(stroke_command(&border.stroke));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(images));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Draw an image XObject scaled into `rect`.
///
/// Empty rectangles are skipped: a zero scale is a singular matrix.
fn image_command(xobject_name: &str, rect: &Rect) -> Option<String> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    Some(format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        rect.width, rect.height, rect.x, rect.y, xobject_name
    ))
}

fn shadow_command(shadow: &BorderShadow) -> String {
    let rect = &shadow.rect;
    format!(
        "q {} g {} {} {} {} re f Q\n",
        shadow.gray, rect.x, rect.y, rect.width, rect.height
    )
}

fn stroke_command(stroke: &BorderStroke) -> String {
    let (r, g, b) = stroke.color.to_unit();
    let dash = match stroke.dash {
        Some([on, off]) => format!("[{} {}] 0 d", on, off),
        None => "[] 0 d".to_string(),
    };
    let rect = &stroke.rect;
    format!(
        "q {} {} {} RG {} w {} {} {} {} {} re S Q\n",
        r, g, b, stroke.width_pt, dash, rect.x, rect.y, rect.width, rect.height
    )
}
