use gl_wrapper::renderer::GlRenderer;

use crate::app::AppError;

///
/// Static content of a viewer window
///
/// `load` runs once the GL context is current and creates everything `draw`
/// needs, `draw` is called for every frame after the window was cleared.
///
pub trait Demo {
    type Resources: 'static;

    fn title(&self) -> String;
    fn clear_color(&self) -> [f32; 3];
    fn load(&self) -> Result<Self::Resources, AppError>;
    fn draw(&self, resources: &Self::Resources, renderer: &mut GlRenderer);
}
