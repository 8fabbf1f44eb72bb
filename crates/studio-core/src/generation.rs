//! Generation workflow shared by every studio: debit, call the image
//! service, record each result.
//!
//! Credits are spent per image before the service is called. A service
//! failure does not refund them.

use studio_types::{
    asset::Asset,
    config::GenerationConfig,
    event::StudioEvent,
    studio::{AspectRatio, Studio},
    Result, StudioError,
};

use crate::context::StudioContext;
use crate::ports::ImageGenerator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub studio: Studio,
    pub prompt: String,
    /// Studio-specific prompt knob, see [`Studio::expand_prompt`]
    pub modifier: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
    pub quantity: u32,
}

impl GenerationRequest {
    pub fn new(studio: Studio, prompt: impl Into<String>) -> Self {
        Self {
            studio,
            prompt: prompt.into(),
            modifier: None,
            aspect_ratio: None,
            quantity: 1,
        }
    }

    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub fn with_aspect_ratio(mut self, ratio: AspectRatio) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn expanded_prompt(&self) -> String {
        self.studio
            .expand_prompt(&self.prompt, self.modifier.as_deref())
    }

    fn validate(&self, config: &GenerationConfig) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(StudioError::Generation("Prompt is empty".to_string()));
        }
        let max = if self.studio.supports_quantity() {
            config.max_quantity.max(1)
        } else {
            1
        };
        if self.quantity == 0 || self.quantity > max {
            return Err(StudioError::InvalidQuantity {
                requested: self.quantity,
                max,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Assets recorded by this run, in generation order
    pub assets: Vec<Asset>,
    pub credits_spent: u32,
    /// Credits ran out before every requested image was paid for
    pub interrupted: bool,
}

/// Run one studio request end to end.
///
/// The whole request must be affordable up front. Each image is then
/// debited individually right before its service call.
pub async fn run_generation(
    ctx: &StudioContext,
    generator: &dyn ImageGenerator,
    request: &GenerationRequest,
    config: &GenerationConfig,
) -> Result<GenerationOutcome> {
    request.validate(config)?;

    let cost = config.cost_per_image;
    let total = cost.saturating_mul(request.quantity);
    let available = ctx
        .current_session()
        .ok_or(StudioError::NoActiveSession)?
        .credits;
    if available < total {
        return Err(StudioError::InsufficientCredits {
            needed: total,
            available,
        });
    }

    let studio = request.studio;
    let prompt = request.expanded_prompt();
    let ratio = studio.aspect_ratio_for(request.aspect_ratio);
    let mut outcome = GenerationOutcome::default();

    for _ in 0..request.quantity {
        if cost > 0 {
            if let Err(refusal) = ctx.charge(cost) {
                if outcome.credits_spent == 0 {
                    return Err(refusal.into());
                }
                outcome.interrupted = true;
                break;
            }
            outcome.credits_spent += cost;
        }

        match generator.generate(&prompt, ratio).await {
            Ok(Some(payload)) => {
                let asset = Asset::from_payload(studio.kind(), &payload, prompt.clone());
                ctx.record(asset.clone());
                outcome.assets.push(asset);
            }
            Ok(None) => {
                log::warn!("{}: service returned no image", studio.label());
            }
            Err(e) => {
                let message = match e {
                    StudioError::Generation(m) => m,
                    other => other.to_string(),
                };
                log::error!(
                    "{} generation failed after spending {} credits: {}",
                    studio.label(),
                    outcome.credits_spent,
                    message
                );
                ctx.events().emit(StudioEvent::GenerationFailed {
                    studio,
                    message: message.clone(),
                });
                return Err(StudioError::Generation(message));
            }
        }
    }

    log::info!(
        "{}: {} asset(s) for {} credits",
        studio.label(),
        outcome.assets.len(),
        outcome.credits_spent
    );
    Ok(outcome)
}
