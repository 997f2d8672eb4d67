
use softgl::{Pipeline, Source, Rgba8, Texture, Pixfmt, Rgb8};

const QUAD: [f64; 12] = [-1.,-1., 1.,-1., 1.,1.,  -1.,-1., 1.,1., -1.,1.];

fn texels() -> [Rgba8; 4] {
    [Rgba8::new(255,0,0,255), Rgba8::new(0,255,0,255),
     Rgba8::new(0,0,255,255), Rgba8::new(10,20,30,255)]
}

fn checker() -> Vec<u8> {
    texels().iter().flat_map(|c| vec![c.r, c.g, c.b]).collect()
}

fn render(mut pipe: Pipeline) -> softgl::Canvas {
    pipe.set_positions(2, &QUAD).unwrap();
    pipe.set_colors(3, &[1.0; 18]).unwrap();
    // Coordinates run 0 to 2, so the 2x2 texture repeats twice
    pipe.set_texcoords(&[0.,0., 2.,0., 2.,2.,  0.,0., 2.,2., 0.,2.]).unwrap();
    pipe.draw_arrays(0, 6).unwrap();
    pipe.finalize().unwrap()
}

#[test]
fn t06_texture_wraps() {
    let mut pipe = Pipeline::default();
    pipe.init_canvas(4, 4, "t06.png").unwrap();
    pipe.bind_texture_image(Texture::Rgb(Pixfmt::<Rgb8>::from_raw(checker(), 2, 2)));
    let canvas = render(pipe);
    let t = texels();
    for y in 0 .. 4 {
        for x in 0 .. 4 {
            assert_eq!(canvas.pixf.get((x,y)), t[(y % 2) * 2 + x % 2], "({},{})", x, y);
        }
    }
}

#[test]
fn t06_texture_from_file() {
    let path = std::env::temp_dir().join(format!("softgl-t06-{}.png", std::process::id()));
    image::save_buffer(&path, &checker(), 2, 2, image::ColorType::Rgb8).unwrap();

    let mut pipe = Pipeline::default();
    pipe.init_canvas(4, 4, "t06.png").unwrap();
    pipe.bind_texture(&path).unwrap();
    assert!(pipe.modes().texture);
    let canvas = render(pipe);
    std::fs::remove_file(&path).unwrap();

    let t = texels();
    assert_eq!(canvas.pixf.get((0,0)), t[0]);
    assert_eq!(canvas.pixf.get((3,0)), t[1]);
    assert_eq!(canvas.pixf.get((2,1)), t[2]);
    assert_eq!(canvas.pixf.get((3,3)), t[3]);
}

#[test]
fn t06_texture_alpha_blends() {
    // Opaque red underneath, then a texture with one clear texel
    let mut pipe = Pipeline::default();
    pipe.init_canvas(2, 1, "t06.png").unwrap();
    pipe.set_positions(2, &QUAD).unwrap();
    pipe.set_colors(3, &[1.,0.,0.].repeat(6)).unwrap();
    pipe.draw_arrays(0, 6).unwrap();

    let tex = Pixfmt::<Rgba8>::from_raw(vec![0,0,255,0, 0,0,255,255], 2, 1);
    pipe.bind_texture_image(Texture::Rgba(tex));
    pipe.set_texcoords(&[0.,0., 1.,0., 1.,1.,  0.,0., 1.,1., 0.,1.]).unwrap();
    pipe.draw_arrays(0, 6).unwrap();
    let canvas = pipe.finalize().unwrap();
    assert_eq!(canvas.pixf.get((0,0)), Rgba8::new(255,0,0,255));
    assert_eq!(canvas.pixf.get((1,0)), Rgba8::new(0,0,255,255));
}
