//! Headless walkthrough of an attach/detach cycle.
//!
//! Run with `RUST_LOG=debug cargo run --example responsive` to see the
//! sizer's log output.

use videoflex::{ResponsiveSizer, SizerOptions};
use videoflex_dom::MemoryDocument;

fn main() {
    env_logger::init();

    let mut doc = MemoryDocument::new();
    let video = doc.insert_video("clip.mp4");

    let sizer = ResponsiveSizer::with_options(SizerOptions {
        width_percent: 60,
        ..Default::default()
    });
    let mut attachment = match sizer.attach(&mut doc, video) {
        Ok(attachment) => attachment,
        Err(err) => {
            eprintln!("attach failed: {err}");
            return;
        }
    };

    println!("container: {}", doc.inline_style(attachment.container()));
    println!("video:     {}", doc.inline_style(video));

    attachment.bind_pointer_controls(&mut doc);

    // Double-click enters fullscreen; the host then notifies the attachment.
    attachment.handle_event(&mut doc, "dblclick");
    attachment.handle_event(&mut doc, "fullscreenchange");
    println!("fullscreen container: {}", doc.inline_style(attachment.container()));

    attachment.handle_event(&mut doc, "dblclick");
    attachment.handle_event(&mut doc, "fullscreenchange");
    println!("restored container:   {}", doc.inline_style(attachment.container()));

    attachment.detach(&mut doc);
    println!("listeners after detach: {}", doc.listener_count());
}
