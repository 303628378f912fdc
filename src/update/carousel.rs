//! Handlers for carousel messages (slide transitions)

use crate::commands::Cmd;
use crate::messages::CarouselMsg;
use crate::model::AppModel;

/// Handle carousel messages.
///
/// Every transition is followed by a lazy-load check: if the new active
/// slide or its neighbors are still undecoded, the returned command asks
/// the runtime to decode them (and repaint); otherwise a plain repaint.
pub fn update_carousel(model: &mut AppModel, msg: CarouselMsg) -> Option<Cmd> {
    match msg {
        CarouselMsg::Next => model.carousel.next(),
        CarouselMsg::Prev => model.carousel.prev(),
        CarouselMsg::GoTo(slide) => {
            // Index comes from a dot's stored slide index; dots are
            // synthesized 1:1 with slides, so it is in range.
            model.carousel.go_to(slide);
        }
        CarouselMsg::First => model.carousel.go_to(0),
        CarouselMsg::Last => {
            let last = model.carousel.count() - 1;
            model.carousel.go_to(last);
        }
    }

    tracing::debug!(
        current = model.carousel.current(),
        count = model.carousel.count(),
        "slide transition"
    );

    let targets = model.deck.preload_targets(model.carousel.current());
    if targets.is_empty() {
        Some(Cmd::Redraw)
    } else {
        Some(Cmd::LoadSlides(targets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{DecodedImage, SlideDeck, SlideImage};
    use crate::theme::Theme;
    use std::path::PathBuf;

    fn model(n: usize) -> AppModel {
        let deck = SlideDeck::from_paths(
            (0..n).map(|i| PathBuf::from(format!("{}.png", i))).collect(),
        );
        AppModel::new(800, 600, deck, 0, Theme::default())
    }

    #[test]
    fn test_transitions_request_lazy_loads() {
        let mut m = model(5);
        let cmd = update_carousel(&mut m, CarouselMsg::Next);
        assert_eq!(cmd, Some(Cmd::LoadSlides(vec![1, 2, 0])));
    }

    #[test]
    fn test_fully_loaded_deck_only_redraws() {
        let mut m = model(3);
        for i in 0..3 {
            m.deck.get_mut(i).unwrap().image = SlideImage::Loaded(DecodedImage {
                pixels: vec![0; 4],
                width: 1,
                height: 1,
            });
        }
        let cmd = update_carousel(&mut m, CarouselMsg::Next);
        assert_eq!(cmd, Some(Cmd::Redraw));
    }

    #[test]
    fn test_first_and_last() {
        let mut m = model(4);
        update_carousel(&mut m, CarouselMsg::Last);
        assert_eq!(m.carousel.current(), 3);
        update_carousel(&mut m, CarouselMsg::First);
        assert_eq!(m.carousel.current(), 0);
    }
}
