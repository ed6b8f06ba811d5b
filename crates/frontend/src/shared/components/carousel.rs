//! Image carousel - shows one of the four cat images at a time with
//! wrapping previous/next navigation and dot indicators.

use crate::shared::data::CAT_IMAGES;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Step a slide index one position forward or backward with wraparound.
/// `len` must be non-zero.
pub fn wrap_index(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[component]
pub fn Carousel() -> impl IntoView {
    let (current, set_current) = signal(0usize);

    let go_prev = move |_| set_current.update(|i| *i = wrap_index(*i, CAT_IMAGES.len(), false));
    let go_next = move |_| set_current.update(|i| *i = wrap_index(*i, CAT_IMAGES.len(), true));

    view! {
        <div class="carousel">
            <button
                class="carousel__nav carousel__nav--prev"
                aria-label="Previous image"
                on:click=go_prev
            >
                {icon("chevron-left")}
            </button>
            <img
                class="carousel__image"
                src=move || CAT_IMAGES[current.get()]
                alt=move || format!("Cat {}", current.get() + 1)
            />
            <button
                class="carousel__nav carousel__nav--next"
                aria-label="Next image"
                on:click=go_next
            >
                {icon("chevron-right")}
            </button>
            <div class="carousel__dots">
                {CAT_IMAGES
                    .iter()
                    .enumerate()
                    .map(|(slide, _)| {
                        view! {
                            <button
                                class="carousel__dot"
                                class:carousel__dot--active=move || current.get() == slide
                                aria-label=format!("Go to image {}", slide + 1)
                                on:click=move |_| set_current.set(slide)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_wraps_at_the_end() {
        assert_eq!(wrap_index(0, 4, true), 1);
        assert_eq!(wrap_index(2, 4, true), 3);
        assert_eq!(wrap_index(3, 4, true), 0);
    }

    #[test]
    fn backward_wraps_at_the_start() {
        assert_eq!(wrap_index(3, 4, false), 2);
        assert_eq!(wrap_index(1, 4, false), 0);
        assert_eq!(wrap_index(0, 4, false), 3);
    }

    #[test]
    fn full_cycle_returns_to_origin() {
        let len = CAT_IMAGES.len();
        let mut i = 0;
        for _ in 0..len {
            i = wrap_index(i, len, true);
        }
        assert_eq!(i, 0);
    }

    #[test]
    fn single_slide_stays_put() {
        assert_eq!(wrap_index(0, 1, true), 0);
        assert_eq!(wrap_index(0, 1, false), 0);
    }
}
