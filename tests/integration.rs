//! End-to-end decode pipeline tests: raw resource bytes in, icon
//! collections and exported PNG files out.

use anyhow::anyhow;
use icoharvest::export::export_collection;
use icoharvest::{
    decode_icons, DecodeConfig, IconError, MemorySource, RawGroupResource, ResourceSource,
};
use image::{Rgba, RgbaImage};
use std::collections::HashMap;
use std::io::Cursor;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageOutputFormat::Png)
        .unwrap();
    buf
}

/// Raw 8x2 8bpp legacy icon resource with a two-color palette and an AND
/// mask marking the top-left pixel transparent.
fn legacy_icon_bytes() -> Vec<u8> {
    let mut d = Vec::new();
    d.extend_from_slice(&40u32.to_le_bytes()); // header size
    d.extend_from_slice(&8i32.to_le_bytes()); // width
    d.extend_from_slice(&4i32.to_le_bytes()); // doubled height
    d.extend_from_slice(&1u16.to_le_bytes()); // planes
    d.extend_from_slice(&8u16.to_le_bytes()); // bit count
    d.extend_from_slice(&[0u8; 16]); // compression, image size, ppm
    d.extend_from_slice(&2u32.to_le_bytes()); // colors used
    d.extend_from_slice(&0u32.to_le_bytes()); // important colors
    d.extend_from_slice(&[0, 0, 255, 0]); // palette 0: red (BGRX)
    d.extend_from_slice(&[255, 0, 0, 0]); // palette 1: blue
    d.extend_from_slice(&[1u8; 8]); // XOR bottom row: all blue
    d.extend_from_slice(&[0u8; 8]); // XOR top row: all red
    d.extend_from_slice(&[0u8, 0, 0, 0]); // mask bottom row: opaque
    d.extend_from_slice(&[0b1000_0000, 0, 0, 0]); // mask top row: pixel 0 set
    d
}

fn group_directory(entries: &[(u8, u8, u16, u16)]) -> Vec<u8> {
    let mut buf = vec![0x00, 0x00, 0x01, 0x00];
    buf.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for &(w, h, bpp, id) in entries {
        buf.push(w);
        buf.push(h);
        buf.push(0);
        buf.push(0);
        buf.extend_from_slice(&1u16.to_le_bytes());
        buf.extend_from_slice(&bpp.to_le_bytes());
        buf.extend_from_slice(&0u32.to_le_bytes());
        buf.extend_from_slice(&id.to_le_bytes());
    }
    buf
}

#[test]
fn full_pipeline_decodes_mixed_group() {
    init_tracing();
    let mut source = MemorySource::new();
    // Group "app": a 256x256 PNG variant and an 8x2 legacy variant.
    source.add_group(
        1,
        Some("app"),
        group_directory(&[(0, 0, 32, 10), (8, 2, 8, 11)]),
    );
    source.insert_image(10, png_bytes(256, 256, [5, 6, 7, 255]));
    source.insert_image(11, legacy_icon_bytes());
    // Group 2 carries garbage directory bytes: present but unusable.
    source.add_group(2, None, vec![0xBA, 0xAD]);

    let collection = decode_icons(&source, &DecodeConfig::default()).unwrap();

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.total_variants(), 2);

    let app = &collection.groups[0];
    assert_eq!(app.group_name.as_deref(), Some("app"));
    assert_eq!(app.variants.len(), 2);

    let png_variant = &app.variants[0];
    assert_eq!(png_variant.entry.width, 256, "0 byte resolves to 256");
    assert_eq!(png_variant.image.width, 256);
    assert_eq!(png_variant.image.bit_depth, 32);
    assert_eq!(png_variant.image.source_image_id, 10);

    let legacy_variant = &app.variants[1];
    assert_eq!(legacy_variant.image.width, 8);
    assert_eq!(legacy_variant.image.height, 2);
    let raster = &legacy_variant.image.pixels;
    assert_eq!(raster.get_pixel(0, 0).0[3], 0, "masked pixel is transparent");
    assert_eq!(raster.get_pixel(1, 0).0, [255, 0, 0, 255], "palette 0 is red");
    assert_eq!(raster.get_pixel(0, 1).0, [0, 0, 255, 255], "palette 1 is blue");

    let unusable = &collection.groups[1];
    assert_eq!(unusable.group_id, 2);
    assert!(unusable.variants.is_empty(), "group kept despite zero variants");
}

#[test]
fn resource_free_source_yields_empty_collection_not_error() {
    let source = MemorySource::new();
    let collection = decode_icons(&source, &DecodeConfig::default()).unwrap();
    assert!(collection.is_empty());
}

struct FailingSource;

impl ResourceSource for FailingSource {
    fn group_resources(&self) -> anyhow::Result<Vec<RawGroupResource>> {
        Err(anyhow!("resource directory unreadable"))
    }

    fn image_resources(&self) -> anyhow::Result<HashMap<u16, Vec<u8>>> {
        Ok(HashMap::new())
    }
}

#[test]
fn source_failure_is_fatal_and_distinguishable() {
    let err = decode_icons(&FailingSource, &DecodeConfig::default()).unwrap_err();
    assert!(matches!(err, IconError::Source(_)));
    assert!(err.to_string().contains("resource directory unreadable"));
}

#[test]
fn decode_then_export_round_trip() {
    init_tracing();
    let mut source = MemorySource::new();
    source.add_group(7, Some("toolbar"), group_directory(&[(8, 2, 8, 3)]));
    source.insert_image(3, legacy_icon_bytes());

    let collection = decode_icons(&source, &DecodeConfig { parallel: true }).unwrap();
    let dir = TempDir::new().unwrap();
    let written = export_collection(&collection, dir.path()).unwrap();

    assert_eq!(written, 1);
    let path = dir.path().join("toolbar_8x2.png");
    let reloaded = image::open(&path).unwrap().to_rgba8();
    assert_eq!((reloaded.width(), reloaded.height()), (8, 2));
    assert_eq!(
        reloaded.get_pixel(0, 0).0[3],
        0,
        "transparency survives PNG re-encode"
    );
}
