
use softgl::{Pipeline, Source, Pixel, Rgba8};

// Same triangle in both windings; the first is clockwise with y down
const CW:  [f64; 6] = [-0.6,-0.6, 0.4,-0.6, -0.6,0.4];
const CCW: [f64; 6] = [-0.6,-0.6, -0.6,0.4, 0.4,-0.6];

fn covered(pos: &[f64], cull: bool) -> usize {
    let mut pipe = Pipeline::default();
    pipe.init_canvas(10, 10, "t05.png").unwrap();
    if cull {
        pipe.enable_backface_cull();
    }
    pipe.set_positions(2, pos).unwrap();
    pipe.set_colors(3, &[1.,1.,1., 1.,1.,1., 1.,1.,1.]).unwrap();
    pipe.draw_arrays(0, 3).unwrap();
    let canvas = pipe.finalize().unwrap();
    let mut n = 0;
    for y in 0 .. canvas.pixf.height() {
        for x in 0 .. canvas.pixf.width() {
            if canvas.pixf.get((x,y)) != Rgba8::transparent() {
                n += 1;
            }
        }
    }
    n
}

#[test]
fn t05_cull_clockwise() {
    assert_eq!(covered(&CW, false), 15);
    assert_eq!(covered(&CCW, false), 15);
    assert_eq!(covered(&CW, true), 0);
    assert_eq!(covered(&CCW, true), 15);
}
