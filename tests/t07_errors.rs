
use softgl::{Pipeline, Error, Source, Pixel, Rgba8};

fn blank(pipe: Pipeline) -> bool {
    let canvas = pipe.finalize().unwrap();
    (0 .. canvas.pixf.height()).all(|y| {
        (0 .. canvas.pixf.width()).all(|x| canvas.pixf.get((x,y)) == Rgba8::transparent())
    })
}

fn pipeline() -> Pipeline {
    let mut pipe = Pipeline::default();
    pipe.init_canvas(4, 4, "t07.png").unwrap();
    pipe
}

#[test]
fn t07_index_out_of_range() {
    let mut pipe = pipeline();
    pipe.set_positions(2, &[-1.,-1., 1.,-1., -1.,1.]).unwrap();
    match pipe.draw_arrays(0, 6) {
        Err(Error::IndexOutOfRange { buffer, index, len }) => {
            assert_eq!((buffer, index, len), ("position", 3, 3));
        }
        other => panic!("unexpected {:?}", other),
    }
    // First triangle was valid but nothing is drawn
    assert!(blank(pipe));
}

#[test]
fn t07_short_color_buffer() {
    let mut pipe = pipeline();
    pipe.set_positions(2, &[-1.,-1., 1.,-1., -1.,1.]).unwrap();
    pipe.set_colors(3, &[1.,1.,1., 1.,1.,1.]).unwrap();
    assert!(matches!(pipe.draw_arrays(0, 3),
                     Err(Error::IndexOutOfRange { buffer: "color", index: 2, .. })));
    assert!(blank(pipe));
}

#[test]
fn t07_elements() {
    let mut pipe = pipeline();
    pipe.set_positions(2, &[-1.,-1., 1.,-1., -1.,1.]).unwrap();
    assert!(matches!(pipe.draw_indexed(3, 0), Err(Error::InvalidState(_))));
    pipe.set_indices(&[0, 1, 2, 0, 1, 7]).unwrap();
    assert!(matches!(pipe.draw_indexed(6, 0),
                     Err(Error::IndexOutOfRange { buffer: "position", index: 7, .. })));
    assert!(matches!(pipe.draw_indexed(3, 4),
                     Err(Error::IndexOutOfRange { buffer: "elements", index: 6, len: 6 })));
    assert!(blank(pipe));
}

#[test]
fn t07_degenerate_w() {
    let mut pipe = pipeline();
    pipe.set_positions(4, &[-1.,-1.,0.,1.,  1.,-1.,0.,1.,  -1.,1.,0.,1.,
                            -1.,-1.,0.,1.,  1.,-1.,0.,1.,  -1.,1.,0.,0.]).unwrap();
    pipe.set_colors(3, &[1.0; 18]).unwrap();
    assert!(matches!(pipe.draw_arrays(0, 6), Err(Error::DegenerateGeometry { vertex: 5 })));
    assert!(blank(pipe));
}

#[test]
fn t07_invalid_state() {
    let mut pipe = Pipeline::default();
    assert!(matches!(pipe.init_canvas(0, 4, "t07.png"), Err(Error::InvalidState(_))));
    pipe.set_positions(2, &[-1.,-1., 1.,-1., -1.,1.]).unwrap();
    assert!(matches!(pipe.draw_arrays(0, 3), Err(Error::InvalidState(_))));

    let mut pipe = pipeline();
    assert!(matches!(pipe.draw_arrays(0, 3), Err(Error::InvalidState(_))));
    assert!(matches!(pipe.set_positions(5, &[0.0; 5]), Err(Error::InvalidState(_))));
    assert!(matches!(pipe.set_positions(2, &[0.0; 5]), Err(Error::InvalidState(_))));
    assert!(matches!(pipe.set_colors(2, &[0.0; 4]), Err(Error::InvalidState(_))));
    assert!(matches!(pipe.enable_supersampling(0), Err(Error::InvalidState(_))));
    pipe.set_positions(2, &[-1.,-1., 1.,-1., -1.,1.]).unwrap();
    assert!(matches!(pipe.draw_arrays(0, 4), Err(Error::InvalidState(_))));
    assert!(blank(pipe));
}

#[test]
fn t07_resolution_change_after_draw() {
    let mut pipe = pipeline();
    pipe.set_positions(2, &[-1.,-1., 1.,-1., -1.,1.]).unwrap();
    pipe.draw_arrays(0, 3).unwrap();
    pipe.enable_supersampling(1).unwrap();
    assert!(matches!(pipe.enable_supersampling(2), Err(Error::InvalidState(_))));
    assert_eq!(pipe.modes().level, 1);
}

#[test]
fn t07_missing_texture() {
    let mut pipe = pipeline();
    let path = std::env::temp_dir().join("softgl-t07-no-such-texture.png");
    match pipe.bind_texture(&path) {
        Err(Error::ResourceLoad { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected {:?}", other),
    }
    assert!(!pipe.modes().texture);
}
