use indoc::indoc;

/// One image to generate: the file it is saved as and the prompt sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePrompt {
    pub filename: &'static str,
    pub prompt: &'static str,
}

impl ImagePrompt {
    /// First line of the prompt, used in progress output
    pub fn summary(&self) -> &'static str {
        self.prompt.lines().next().unwrap_or_default()
    }
}

pub fn find(filename: &str) -> Option<&'static ImagePrompt> {
    IMAGE_PROMPTS.iter().find(|p| p.filename == filename)
}

/// The snow-themed landing page images, in generation order
pub const IMAGE_PROMPTS: &[ImagePrompt] = &[
    ImagePrompt {
        filename: "hero-illustration.png",
        prompt: indoc! {"
            Create a beautiful ethereal winter illustration with:
            - Soft blue and pink gradient background
            - Elegant snowflakes and ice crystals floating
            - A magical bridge made of light connecting two floating islands
            - One island has warm orange/coral tones (representing Ethereum)
            - Other island has cool purple/blue tones (representing Polkadot)
            - Dreamy, modern, minimalist tech aesthetic
            - Suitable for a cryptocurrency bridge website hero section
            - Clean, professional, high quality digital art"},
    },
    ImagePrompt {
        filename: "snow-crystal-hero.png",
        prompt: indoc! {"
            Create a stunning 3D rendered snowflake crystal:
            - Large, detailed geometric snowflake design
            - Soft gradient from coral pink to lavender to light blue
            - Glass-like transparency with light refraction effects
            - Floating in a soft gradient background
            - Modern minimal design suitable for tech branding
            - Clean edges, high quality render
            - Elegant and sophisticated feel"},
    },
    ImagePrompt {
        filename: "abstract-winter-bg.png",
        prompt: indoc! {"
            Create an abstract winter-themed background:
            - Flowing organic shapes with frosted glass effect
            - Color palette: soft blues, white, hints of pink and lavender
            - Subtle crystalline patterns
            - Bokeh light effects like sunlight on snow
            - Modern minimalist style
            - Suitable as a website section background
            - Dreamy, ethereal atmosphere"},
    },
    ImagePrompt {
        filename: "trust-illustration.png",
        prompt: indoc! {"
            Create an illustration representing trust and security:
            - Abstract shield or protective dome made of crystalline ice
            - Soft blue and teal color palette
            - Light particles flowing around showing data/transactions
            - Modern, clean tech aesthetic
            - Conveys safety and protection
            - Minimalist style suitable for a fintech website"},
    },
    ImagePrompt {
        filename: "bridge-tokens.png",
        prompt: indoc! {"
            Create an illustration of tokens crossing a bridge:
            - Glowing circular tokens/coins flowing across a light bridge
            - Ethereal, magical atmosphere
            - Gradient from warm coral/orange on one side to cool purple/blue on other
            - Particles of light trailing behind tokens
            - Modern tech aesthetic
            - Clean minimalist design
            - Suitable for a cryptocurrency bridge website"},
    },
    ImagePrompt {
        filename: "snow-mountain-bg.png",
        prompt: indoc! {"
            Digital illustration of a cute fantasy winter wonderland scene:
            - Kawaii/cute style illustration with soft rounded shapes
            - Fluffy stylized clouds in pastel pink and lavender colors
            - Cute rounded snow-covered hills and mountains
            - Magical sparkles and glowing orbs floating in the air
            - Soft gradient sky from pink to purple to light blue
            - Style similar to: Dribbble illustrations, Behance digital art, modern app illustrations
            - Flat design with subtle gradients, NO photorealism
            - Dreamy, magical, fantasy atmosphere
            - Very high quality, 4K resolution, crisp clean lines
            - Wide banner format 1920x600 pixels
            - Light and airy feel, lots of white space in the sky area"},
    },
];
