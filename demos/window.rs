use viewport_fixer::{Camera, DisplayMetrics, FixerConfig, FrameColors, Renderer, ViewportFixer};
use winit::{event, event_loop, window};

// F11 toggles borderless fullscreen, F5 re-applies the viewport fix.
fn main() {
    env_logger::init();

    let event_loop = event_loop::EventLoop::new();
    let window = window::WindowBuilder::new()
        .with_title("viewport fixer")
        .with_resizable(false)
        .build(&event_loop)
        .unwrap();

    let colors = FrameColors::default();
    let mut renderer = Renderer::new(&window, colors).unwrap();
    let mut camera = Camera::new();
    let mut fixer = ViewportFixer::new(FixerConfig::default());

    if let Err(error) = fixer.start(&DisplayMetrics::from_window(&window), &mut camera) {
        log::warn!("initial viewport fix skipped: {}", error);
    }

    event_loop.run(move |event, _, control_flow| {
        match event {
            event::Event::RedrawRequested(_) => {
                if let Err(error) = renderer.render(&camera, colors) {
                    log::error!("{}", error);
                }
            },
            event::Event::MainEventsCleared => {
                let metrics = DisplayMetrics::from_window(&window);

                if let Err(error) = fixer.update(&metrics, &mut camera) {
                    log::warn!("{}", error);
                }

                window.request_redraw();
            },
            event::Event::WindowEvent { event, .. } => match event {
                event::WindowEvent::Resized(size) => {
                    renderer.resize(&size);
                },
                event::WindowEvent::ScaleFactorChanged { new_inner_size: size, .. } => {
                    renderer.resize(size);
                },
                event::WindowEvent::KeyboardInput { input, .. } => {
                    if input.state != event::ElementState::Pressed { return; }

                    match input.virtual_keycode {
                        Some(event::VirtualKeyCode::F11) => {
                            let fullscreen = match window.fullscreen() {
                                Some(_) => None,
                                None => Some(window::Fullscreen::Borderless(window.current_monitor())),
                            };

                            window.set_fullscreen(fullscreen);
                        },
                        Some(event::VirtualKeyCode::F5) => {
                            let metrics = DisplayMetrics::from_window(&window);

                            if let Err(error) = fixer.fix(&metrics, &mut camera) {
                                log::warn!("{}", error);
                            }
                        },
                        _ => {},
                    }
                },
                event::WindowEvent::CloseRequested => {
                    *control_flow = event_loop::ControlFlow::Exit;
                },
                _ => {},
            },
            _ => {},
        }
    });
}
