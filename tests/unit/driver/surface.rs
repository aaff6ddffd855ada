use super::*;

fn frame(side: u32, fill: u8) -> OutputFrame {
    let mut f = OutputFrame::blank(Canvas::square(side).unwrap());
    for (i, b) in f.data.iter_mut().enumerate() {
        if i % 4 != 3 {
            *b = fill;
        }
    }
    f
}

fn scratch_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dithershade-{tag}-{}", std::process::id()))
}

#[test]
fn in_memory_surface_records_lifecycle() {
    let mut s = InMemorySurface::new();
    s.init(Canvas::square(2).unwrap()).unwrap();
    s.present(&frame(2, 10)).unwrap();
    s.present(&frame(2, 20)).unwrap();
    s.end().unwrap();
    assert_eq!(s.canvas(), Some(Canvas::square(2).unwrap()));
    assert_eq!(s.frames().len(), 2);
    assert_eq!(s.frames()[1].data[0], 20);
    assert!(s.is_ended());
}

#[test]
fn in_memory_surface_can_bound_retention() {
    let mut s = InMemorySurface::keep_last(2);
    s.init(Canvas::square(1).unwrap()).unwrap();
    for v in 1..=5 {
        s.present(&frame(1, v)).unwrap();
    }
    assert_eq!(s.presented(), 5);
    let kept: Vec<u8> = s.frames().iter().map(|f| f.data[0]).collect();
    assert_eq!(kept, vec![4, 5]);
}

#[test]
fn keep_last_zero_still_retains_the_newest_frame() {
    let mut s = InMemorySurface::keep_last(0);
    s.init(Canvas::square(1).unwrap()).unwrap();
    for v in 1..=50 {
        s.present(&frame(1, v)).unwrap();
    }
    assert_eq!(s.presented(), 50);
    assert_eq!(s.frames().len(), 1);
    assert_eq!(s.frames()[0].data[0], 50);
}

#[test]
fn png_sequence_writes_every_nth_frame() {
    let dir = scratch_dir("seq");
    let _ = std::fs::remove_dir_all(&dir);
    let mut s = PngSequenceSurface::new(&dir, 2);
    s.init(Canvas::square(3).unwrap()).unwrap();
    for v in 0..5 {
        s.present(&frame(3, v * 40)).unwrap();
    }
    s.end().unwrap();
    assert_eq!(s.written(), 3);
    let second = image::open(dir.join("frame_00001.png")).unwrap().to_rgba8();
    assert_eq!(second.get_pixel(0, 0).0, [80, 80, 80, 255]);
    assert!(!dir.join("frame_00003.png").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn png_sequence_init_failure_is_fatal() {
    let file = scratch_dir("not-a-dir");
    std::fs::write(&file, b"x").unwrap();
    let mut s = PngSequenceSurface::new(file.join("nested"), 1);
    let err = s.init(Canvas::square(1).unwrap()).unwrap_err();
    assert!(err.is_fatal());
    let _ = std::fs::remove_file(&file);
}
