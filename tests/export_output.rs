use chrono::{TimeZone, Utc};
use egui::Color32;
use pixel_paint::export::{self, CropRect};
use pixel_paint::{Command, Editor, Resolution};

#[test]
fn test_export_crops_to_drawing() {
    let mut editor = Editor::new(Resolution::R32);
    editor.set_color(Color32::from_rgb(10, 20, 30));
    editor.execute(Command::PointerDown { x: 4, y: 6 });
    editor.execute(Command::PointerMove { x: 5, y: 6 });
    editor.execute(Command::PointerMove { x: 5, y: 7 });
    editor.execute(Command::PointerUp);

    let timestamp = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let image = export::export(editor.grid(), editor.resolution(), 10, timestamp).unwrap();

    assert_eq!(image.file_name, "pixel-art-32x32-2025-01-02T03-04-05-000Z.png");
    assert_eq!(image.crop, CropRect { min_x: 4, min_y: 6, max_x: 5, max_y: 7 });
    assert_eq!((image.width, image.height), (20, 20));

    let decoded = image::load_from_memory(&image.bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (20, 20));
    assert_eq!(decoded.get_pixel(0, 0).0, [10, 20, 30, 255]);
    // (4, 7) was never painted
    assert_eq!(decoded.get_pixel(5, 15).0[3], 0);
}

#[test]
fn test_blank_export_covers_whole_canvas() {
    let editor = Editor::new(Resolution::R16);
    let image = export::export(editor.grid(), editor.resolution(), 2, Utc::now()).unwrap();
    assert_eq!((image.width, image.height), (32, 32));

    let decoded = image::load_from_memory(&image.bytes).unwrap().to_rgba8();
    assert!(decoded.pixels().all(|p| p.0[3] == 0));
}
