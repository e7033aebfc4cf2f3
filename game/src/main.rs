use macroquad::window::next_frame;

use chomper::game_app::App;

#[macroquad::main("Chomper")]
async fn main() {
    chomper::logging::init();

    let mut app = App::new();
    while app.tick() {
        next_frame().await;
    }
}
