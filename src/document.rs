use crate::{
    canvas::Canvas,
    content::render_contents,
    font::StandardFont,
    info::Info,
    rect::Rect,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf};
use std::io::Write;

/// A single-page document: one [Canvas] plus optional metadata. Renders out
/// with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub canvas: Canvas,
}

impl Document {
    pub fn new(canvas: Canvas) -> Document {
        Document { info: None, canvas }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Write the entire document to the writer. The PDF is assembled in memory
    /// first and handed to the writer in one piece.
    ///
    /// Nothing in the output depends on the time or environment unless the info
    /// block carries a creation date, so writing the same document twice yields
    /// the same bytes.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let Document { info, canvas } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);
        let page_id = refs.gen(RefType::Page);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        writer.catalog(catalog_id).pages(page_tree_id);
        writer.pages(page_tree_id).count(1).kids([page_id]);

        for font in StandardFont::ALL.iter() {
            font.write(&mut refs, &mut writer);
        }

        for (id, image) in canvas.images.iter() {
            image.write(&mut refs, id.index(), &mut writer);
        }

        let opacities = canvas.opacities();
        for (i, opacity) in opacities.iter().enumerate() {
            let id = refs.gen(RefType::ExtGState(i));
            writer.ext_graphics(id).non_stroking_alpha(*opacity);
        }

        let rendered = render_contents(&canvas, &opacities)?;
        log::debug!(
            "page content: {} commands, {} bytes before compression",
            canvas.commands.len(),
            rendered.len()
        );
        let compressed = compress_to_vec_zlib(&rendered, CompressionLevel::DefaultLevel as u8);
        let content_id = refs.gen(RefType::PageContent);
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        let mut page = writer.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, *canvas.width, *canvas.height).to_pdf(canvas.height));
        page.parent(page_tree_id);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for font in StandardFont::ALL.iter() {
            if let Some(id) = refs.get(RefType::Font(font.index())) {
                resource_fonts.pair(Name(format!("F{}", font.index()).as_bytes()), id);
            }
        }
        resource_fonts.finish();

        let mut resource_xobjects = resources.x_objects();
        for (id, _) in canvas.images.iter() {
            if let Some(image_ref) = refs.get(RefType::Image(id.index())) {
                resource_xobjects.pair(Name(format!("I{}", id.index()).as_bytes()), image_ref);
            }
        }
        resource_xobjects.finish();

        let mut resource_states = resources.ext_g_states();
        for i in 0..opacities.len() {
            if let Some(id) = refs.get(RefType::ExtGState(i)) {
                resource_states.pair(Name(format!("GS{i}").as_bytes()), id);
            }
        }
        resource_states.finish();
        resources.finish();
        page.finish();

        w.write_all(writer.finish().as_slice())?;
        w.flush().map_err(Into::into)
    }
}
