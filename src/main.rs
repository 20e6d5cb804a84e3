use screen_ruler;

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the ruler application
    screen_ruler::run_app()
}
