use crate::devicestate::DeviceState;
use crate::error::{Error, Result};
use crate::host::{ClockStyle, Host};
use crate::services::Tick;
use crate::ui::background::{compute_night_mode, Background};
use crate::ui::layout;
use crate::ui::region::{BackgroundRegion, BatteryRegion, TextRegion};
use crate::ui::screen::Screen;
use crate::ui::text::{format_date, format_time, format_weekday};
use crate::ui::PixelType;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::image::ImageDrawable;
use embedded_graphics::text::Alignment;

use chrono::Timelike;

/// Regions that only exist while the window is loaded.
struct Window<I> {
    background: BackgroundRegion<I>,
    time: TextRegion,
    weekday: TextRegion,
    date: TextRegion,
    battery: BatteryRegion,
}

impl<I> Window<I>
where
    I: ImageDrawable<Color = PixelType>,
{
    fn new(image: I) -> Self {
        Window {
            background: BackgroundRegion::new(image, layout::WINDOW),
            time: TextRegion::new(layout::TIME, layout::TIME_FONT, Alignment::Center),
            weekday: TextRegion::new(layout::WEEKDAY, layout::LABEL_FONT, Alignment::Left),
            date: TextRegion::new(layout::DATE, layout::LABEL_FONT, Alignment::Right),
            battery: BatteryRegion::new(layout::BATTERY_BAR),
        }
    }

    fn mark_dirty(&mut self) {
        self.time.mark_dirty();
        self.weekday.mark_dirty();
        self.date.mark_dirty();
        self.battery.mark_dirty();
    }
}

/// Time, date, weekday and battery over a day or night background.
///
/// Starts unloaded. [`load`](Self::load) creates the window and picks the
/// background, [`unload`](Self::unload) releases it again. Tick and battery
/// events only mark regions dirty, painting happens through [`Screen`].
pub struct ScreenWatchface<I> {
    state: DeviceState,
    window: Option<Window<I>>,
}

impl<I> Default for ScreenWatchface<I> {
    fn default() -> Self {
        ScreenWatchface {
            state: DeviceState::default(),
            window: None,
        }
    }
}

impl<I> ScreenWatchface<I>
where
    I: ImageDrawable<Color = PixelType>,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.window.is_some()
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn background(&self) -> Background {
        self.state.background
    }

    pub fn time_text(&self) -> Option<&str> {
        self.window.as_ref().map(|window| window.time.text())
    }

    pub fn date_text(&self) -> Option<&str> {
        self.window.as_ref().map(|window| window.date.text())
    }

    pub fn weekday_text(&self) -> Option<&str> {
        self.window.as_ref().map(|window| window.weekday.text())
    }

    /// Create the window: choose the background for the current hour, load
    /// it and fill every region from the host's current readings.
    pub fn load<H>(&mut self, host: &H) -> Result<()>
    where
        H: Host<Image = I>,
    {
        if self.window.is_some() {
            return Err(Error::AlreadyLoaded);
        }

        let now = host.now();
        let background = compute_night_mode(now.hour());
        let image = host.load_image(background.resource())?;
        log::info!("watchface loaded at {} with {:?} background", now, background);

        self.state.background = background;
        self.window = Some(Window::new(image));

        self.on_tick(&Tick::initial(now), host.clock_style());
        self.on_battery_changed(host.battery_peek().charge_percent);
        Ok(())
    }

    /// Release every region and the background image.
    pub fn unload(&mut self) {
        if self.window.take().is_some() {
            log::info!("watchface unloaded");
        }
    }

    pub fn on_tick(&mut self, tick: &Tick, style: ClockStyle) {
        let Some(window) = self.window.as_mut() else {
            log::debug!("tick while unloaded, ignored");
            return;
        };

        window.time.set_text(format_time(&tick.time, style));
        window.date.set_text(format_date(&tick.time));
        window.weekday.set_text(format_weekday(&tick.time));
    }

    /// Store the new level and schedule the battery bar for repainting.
    pub fn on_battery_changed(&mut self, level: u8) {
        self.state.battery_level = level;
        if let Some(window) = self.window.as_mut() {
            window.battery.mark_dirty();
        }
    }

    fn paint<D>(&mut self, display: &mut D, full: bool) -> core::result::Result<(), D::Error>
    where
        D: DrawTarget<Color = PixelType>,
    {
        let level = self.state.battery_level;
        let Some(window) = self.window.as_mut() else {
            return Ok(());
        };

        if full {
            window.background.draw(display)?;
            window.mark_dirty();
        }

        for region in [&mut window.time, &mut window.weekday, &mut window.date] {
            if region.is_dirty() {
                if !full {
                    window.background.draw_area(display, &region.bounds())?;
                }
                region.draw(display)?;
            }
        }

        if window.battery.is_dirty() {
            window.battery.draw(level, display)?;
        }

        Ok(())
    }
}

impl<I, DISPLAY> Screen<DISPLAY> for ScreenWatchface<I>
where
    I: ImageDrawable<Color = PixelType>,
    DISPLAY: DrawTarget<Color = PixelType>,
{
    fn draw_init(&mut self, display: &mut DISPLAY) -> core::result::Result<(), DISPLAY::Error> {
        self.paint(display, true)
    }

    fn draw_update(&mut self, display: &mut DISPLAY) -> core::result::Result<(), DISPLAY::Error> {
        self.paint(display, false)
    }
}
