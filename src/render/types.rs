/// Borrowed view of the frame buffer a renderer draws into.
///
/// `buffer` holds `width * height` pixels in the 0RGB layout softbuffer
/// presents, row-major.
pub struct RenderTarget<'a> {
    pub buffer: &'a mut [u32],
    pub width: usize,
    pub height: usize,
}
