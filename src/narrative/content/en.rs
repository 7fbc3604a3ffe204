use super::{Catalog, ClosingKind};
use crate::models::WeatherCategory;
use crate::narrative::assembler::SeasonalPhase;
use crate::narrative::scenario::ScenarioKey;

pub static CATALOG: Catalog = Catalog {
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    peak: "peak",
    minimum: "minimum",
    scenarios: &[
        (
            ScenarioKey::RainClearingSoon,
            &[
                "The grey won't last: {clear_day} brings clearer skies, just {days_until} days away, and the light is waiting behind the clouds.",
                "Hang in there. Sun is forecast for {clear_day}, so the wet spell ends in {days_until} days.",
                "Today is the tunnel, {clear_day} is the exit. Brighter daylight returns in {days_until} days.",
                "Clouds now, but {clear_day} looks clear. Keep the daylight hours of {clear_day} free for something outside.",
            ],
        ),
        (
            ScenarioKey::CarpeDiem,
            &[
                "Make today count: the sun is out, and {rain_day} is expected to turn wet.",
                "Good light today, rain by {rain_day}. Get outside while the window is open.",
                "The forecast turns on {rain_day}, {days_until} days from now. Today is the day to be outdoors.",
                "Clear skies won't hold past {rain_day}. Use this daylight while you have it.",
            ],
        ),
        (
            ScenarioKey::WarmingTrend,
            &[
                "The week warms up by about {temp_change}°C, and the longer days make it count.",
                "Temperatures climb {temp_change}°C over the coming days while the light keeps growing.",
                "A warming week ahead, {temp_change}°C by the end of it. More sun, more warmth, more daylight.",
                "Milder days are coming: {temp_change}°C over the week, with the daylight stretching alongside.",
            ],
        ),
        (
            ScenarioKey::CoolingTrend,
            &[
                "Temperatures drop about {temp_change}°C this week, but the daylight schedule holds steady.",
                "A cooler spell is on its way, down {temp_change}°C. The light does not care about the thermometer.",
                "It gets {temp_change}°C colder over the coming days. Dress warmly and catch the midday sun.",
                "Cooling by {temp_change}°C, yet every day still brings its share of light.",
            ],
        ),
        (
            ScenarioKey::LightFighter,
            &[
                "Rain or not, the light is gaining: +{delta_min} minutes since yesterday, {day_length} in total.",
                "The weather hides it, but today has {delta_min} more minutes of daylight than yesterday.",
                "Behind the clouds the days keep growing. {day_length} of light today, {delta_min} minutes up on yesterday.",
                "Grey skies can't stop the trend: {delta_min} minutes more light today, {day_length} all told.",
            ],
        ),
        (
            ScenarioKey::GoodStreak,
            &[
                "{streak_days} good days in a row are lined up. Plenty of daylight to plan around.",
                "A run of {streak_days} bright days starts today. The sun is back for a while.",
                "Settled weather for {streak_days} days. Spread your outdoor plans across the light.",
                "Sunny stretch ahead: {streak_days} days of usable daylight in a row.",
            ],
        ),
        (
            ScenarioKey::GreyStretch,
            &[
                "{streak_days} grey days in a row, but the daylight keeps its own schedule.",
                "A wet stretch of {streak_days} days. The light still returns every morning.",
                "The sky stays heavy for {streak_days} days. Catch whatever daylight breaks through.",
                "Grey for {streak_days} days yet, while the days themselves keep changing underneath.",
            ],
        ),
        (
            ScenarioKey::BreakthroughDay,
            &[
                "The sun is back. Today breaks through, so get outside and soak up the light.",
                "A clear day at last. Make today count and give your eyes some real daylight.",
                "Bright skies today. This is the kind of day the light has been building toward.",
                "Today the sun wins. Step out and take in the daylight while it shines.",
            ],
        ),
        (
            ScenarioKey::PeakLight,
            &[
                "We're at the top of the year: {day_length} of daylight today.",
                "Peak light season with {day_length} of day. Long evenings are yours.",
                "{day_length} of sun above the horizon. Few days of the year are this generous.",
                "Maximum daylight territory: {day_length}. Let the evening run late.",
            ],
        ),
        (
            ScenarioKey::PostSolsticeGrind,
            &[
                "Winter still holds on, but you have already gained {hours_gained} of daylight since the solstice.",
                "Since the darkest day, the light has grown by {hours_gained}. The turning point is well behind us.",
                "{hours_gained} more daylight than at the solstice. The climb is slow, but it is real.",
                "The days have stretched by {hours_gained} since December. Winter is losing its grip on the light.",
            ],
        ),
        (
            ScenarioKey::WeekendGood,
            &[
                "The weekend looks bright. Plan something outside for the daylight hours.",
                "Good news for Saturday and Sunday: sun is in the forecast.",
                "A clear weekend is coming. Save the daylight for yourself.",
                "Weekend outlook: bright. Plan accordingly and get the most out of the light.",
            ],
        ),
        (
            ScenarioKey::WeekendBad,
            &[
                "The weekend looks wet. Catch the light during the week if you can.",
                "Rain is due for Saturday and Sunday. Grab a bright hour of daylight beforehand.",
                "A grey weekend ahead. Plan accordingly and use the light on weekdays.",
                "Weekend weather looks poor, so today's daylight is worth more than usual.",
            ],
        ),
        (
            ScenarioKey::SpringAcceleration,
            &[
                "The light is gaining fast now: +{delta_min} minutes per day.",
                "Spring is accelerating. Each day brings {delta_min} more minutes of light.",
                "{delta_min} minutes of daylight added every day. This is the steepest part of the climb.",
                "The days grow by {delta_min} minutes at a time. You can feel the momentum.",
            ],
        ),
        (
            ScenarioKey::SolsticeApproaching,
            &[
                "The solstice is {days_to_solstice} days away, and with it the daylight {peak_or_min}.",
                "{days_to_solstice} days until the light reaches its {peak_or_min}. A turning point is near.",
                "We're closing in on the daylight {peak_or_min}, only {days_to_solstice} days left.",
                "In {days_to_solstice} days the sun reaches its turning point, the year's {peak_or_min}.",
            ],
        ),
        (
            ScenarioKey::StableFocusLight,
            &[
                "Today brings {day_length} of daylight. Step outside and take some of it in.",
                "{day_length} of light today. Even a short walk in it makes a difference.",
                "The day offers {day_length} of daylight. Find a window of it for yourself.",
                "With {day_length} of day to work with, a few minutes of sun are always within reach.",
            ],
        ),
    ],
    unlit_focus: &[
        "Whatever the numbers say, the day is there to be used. Step outside and take some light in.",
        "Even a short walk in today's light makes a difference.",
        "Find a window of daylight for yourself today, however brief.",
        "A few minutes of sun are always within reach. Go and find them.",
    ],
    daylight_facts: &[
        "Today you have {day_length} of daylight, running from {sunrise} to {sunset}.",
        "The day runs {day_length}, with sunrise at {sunrise} and sunset at {sunset}.",
        "Daylight today: {day_length}. The sun is up from {sunrise} to {sunset}.",
        "You're working with {day_length} of light today, {sunrise} to {sunset}.",
        "Today's daylight window: {day_length}, from {sunrise} sunrise to {sunset} sunset.",
    ],
    delta_gain: &[
        "That's {delta} minutes more than yesterday.",
        "You gained {delta} minutes compared to yesterday.",
        "+{delta} minutes versus yesterday.",
        "The day is {delta} minutes longer than it was yesterday.",
    ],
    delta_loss: &[
        "That's {delta} minutes less than yesterday.",
        "You lost {delta} minutes compared to yesterday.",
        "-{delta} minutes versus yesterday.",
        "The day is {delta} minutes shorter than yesterday.",
    ],
    seasonal: &[
        (
            SeasonalPhase::DeepWinter,
            &[
                "We're in the heart of winter, but the days have been lengthening since the solstice.",
                "The darkest days are behind us. Each day now brings a bit more light.",
                "Deep winter outside, but the light is quietly returning.",
                "Winter's grip is firm, yet the daylight trend has reversed.",
            ],
        ),
        (
            SeasonalPhase::LateWinter,
            &[
                "Late winter shows real momentum; daylight gains are accelerating.",
                "This is the fastest phase of light increase before the equinox.",
                "The rate of change peaks now, and each week feels different.",
                "The push toward spring is unmistakable at this time of year.",
            ],
        ),
        (
            SeasonalPhase::EarlySpring,
            &[
                "Spring is officially here, with days now longer than nights.",
                "We're in the light half of the year; outdoor evenings are practical again.",
                "The equinox is behind us and the balance has shifted toward light.",
                "Early spring delivers on winter's promise of abundant light.",
            ],
        ),
        (
            SeasonalPhase::LateSpring,
            &[
                "We're approaching peak daylight; the longest days of the year are near.",
                "Late spring offers some of the best light of the entire year.",
                "The climb toward the summer solstice continues and evenings stretch late.",
                "The final push toward peak light. Enjoy these generous days.",
            ],
        ),
        (
            SeasonalPhase::PeakSummer,
            &[
                "We're at or near peak daylight, the longest days of the year.",
                "The solstice marks both a peak and a turning point.",
                "We're at the summit of the year's light curve.",
                "Enjoy peak daylight; from here the slow return toward winter begins.",
            ],
        ),
        (
            SeasonalPhase::LateSummer,
            &[
                "Summer remains strong, but the days are shorter than at the solstice.",
                "Late summer light is still generous, though sunset creeps earlier each week.",
                "We're past the peak, with plenty of good light left for outdoor plans.",
                "The slow retreat from maximum daylight is underway.",
            ],
        ),
        (
            SeasonalPhase::EarlyAutumn,
            &[
                "Autumn has arrived; the fast decrease in daylight mirrors spring's gains.",
                "We're now in the dark half of the year, with days shorter than nights.",
                "Each week of early autumn brings noticeably earlier sunsets.",
                "The equinox signals the shift; darkness now outweighs light.",
            ],
        ),
        (
            SeasonalPhase::LateAutumn,
            &[
                "We're approaching the year's shortest days, and the solstice will turn them around.",
                "Late autumn means little daylight, but the turnaround is only weeks away.",
                "The descent toward the winter solstice continues, with the bottom in sight.",
                "The year's darkest days approach, and so does the return of light.",
            ],
        ),
    ],
    nature_by_month: [
        &[
            "Look for winter flocks of birds, easy to spot against bare branches.",
            "The low sun throws long shadows and golden light on clear days.",
            "Evergreens stand out now as the only green in many landscapes.",
            "Frost patterns on windows and plants show nature's geometry.",
            "Animal tracks in fresh snow tell stories of the night.",
        ],
        &[
            "Snowdrops and early crocuses may be pushing through.",
            "Listen for more birdsong, especially on milder mornings.",
            "Hazel catkins release their pollen, an early sign of the growing season.",
            "The late afternoon light lingers longer each week.",
            "Tree buds are swelling, though you may need to look closely.",
        ],
        &[
            "Daffodils and early tulips announce spring's arrival.",
            "Migrating birds return; listen for new songs each morning.",
            "Frogs and toads head to ponds to breed.",
            "Bumblebee queens appear, searching for nest sites.",
            "The landscape greens up week by week.",
        ],
        &[
            "Bluebells and other spring flowers peak in the woods.",
            "Trees are leafing out and the canopy closes week by week.",
            "Cherry and apple blossoms put on a spectacular show.",
            "The dawn chorus is at its peak; early mornings are worth it.",
            "Swallows return from the south, a classic spring marker.",
        ],
        &[
            "Hawthorn and elderflower scent the hedgerows.",
            "The woodland canopy is closed now and walks are shaded and green.",
            "Young birds are fledging; look for clumsy juveniles in gardens.",
            "Wildflower meadows reach their peak colour.",
            "Late evening light extends outdoor time considerably.",
        ],
        &[
            "Elderflowers are ready for cordial and fragrant drinks.",
            "Dog roses bloom pink and white along the hedges.",
            "Early strawberries ripen in gardens.",
            "Gardens are lush; growth is at its maximum.",
            "Long evenings invite outdoor dinners and late walks.",
        ],
        &[
            "Lavender and buddleia attract clouds of butterflies.",
            "Swifts scream through the evening sky before they leave in August.",
            "Crickets and grasshoppers provide the soundtrack of summer.",
            "Summer wildflowers are at their peak in meadows.",
            "The slight shortening of days is barely noticeable in the warmth.",
        ],
        &[
            "Blackberries ripen in abundance along the hedgerows.",
            "Swallows gather on wires, getting ready to migrate.",
            "Grain fields turn golden before the harvest.",
            "Morning mists hint at autumn on cooler nights.",
            "Evenings take on a golden slant as the light shifts.",
        ],
        &[
            "Autumn colour starts to show in rowans and cherries.",
            "Mushrooms appear in woods and fields after rain.",
            "Spider webs catch the morning dew.",
            "Squirrels are busy caching nuts for winter.",
            "The light turns lower, warmer and more golden.",
        ],
        &[
            "Autumn colours peak in maples, oaks and beeches.",
            "Leaf fall speeds up through the month.",
            "Geese arrive from the north for the winter.",
            "Fallen leaves and wood smoke mark the season.",
            "Fungi keep fruiting; watch for them on woodland walks.",
        ],
        &[
            "Trees are mostly bare and the landscape opens up.",
            "Starling murmurations fill the evening sky.",
            "Fieldfares and redwings arrive from the north.",
            "Frost becomes regular as the chill settles in.",
            "Bird feeders matter now that natural food runs low.",
        ],
        &[
            "Evergreens stand for life through the darkest days.",
            "Robins and wrens are easiest to spot now.",
            "Holly berries add colour to bare branches.",
            "Frost and perhaps snow transform the landscape.",
            "The quiet of winter has its own peaceful appeal.",
        ],
    ],
    nature_by_weather: &[
        (
            WeatherCategory::Clear,
            &[
                "Clear skies today make the most of the available daylight.",
                "Blue skies amplify the light beautifully.",
                "Sunshine boosts both light levels and mood.",
                "Clear weather like this is worth appreciating.",
            ],
        ),
        (
            WeatherCategory::Grey,
            &[
                "Overcast today, but the daylight hours stay the same.",
                "Grey skies soften the light without shortening the day.",
                "Clouds today, though the sun still rises and sets on schedule.",
                "The light is diffused by clouds but still useful.",
            ],
        ),
        (
            WeatherCategory::Rain,
            &[
                "Rain today; the light is there, just filtered through clouds.",
                "Wet weather limits outdoor time, but the daylight trend continues.",
                "The rain falls, but sunrise and sunset keep their schedule.",
                "Rain feeds the landscape while the light pattern persists.",
            ],
        ),
        (
            WeatherCategory::Snow,
            &[
                "Snow today; the white surface amplifies whatever light there is.",
                "Snow brightens the landscape despite the short days.",
                "A snowy day has its own kind of brightness.",
                "Fresh snow makes the most of the available light.",
            ],
        ),
    ],
    general_facts: &[
        "Morning daylight helps set the body clock for the whole day.",
        "Even an overcast sky delivers many times more light than a bright room.",
        "Day length changes fastest around the equinoxes and slowest near the solstices.",
        "Birds time their singing and nesting by day length rather than temperature.",
        "Many trees use the length of the night to decide when to drop their leaves.",
        "Twilight adds usable light before sunrise and after sunset.",
        "The further from the equator, the bigger the seasonal swing in daylight.",
        "Plants sense day length through pigments in their leaves.",
    ],
    closings: &[
        (
            ClosingKind::Practical,
            &[
                "A short walk at midday catches the brightest light.",
                "Put the outdoor errands in the daylight hours.",
                "Open the curtains early and let the light in.",
            ],
        ),
        (
            ClosingKind::Observational,
            &[
                "Notice where the sun sets today compared to last month.",
                "Watch how the shadows fall at noon.",
                "Look up at the sky at least once today.",
            ],
        ),
        (
            ClosingKind::Simple,
            &["Enjoy the light.", "Have a good day.", "See you tomorrow."],
        ),
    ],
    minute_phrases: &["+{delta} minutes", "{delta} more minutes", "{delta} minutes"],
    delta_phrases: &["+{delta} minutes", "{delta} minutes more", "{delta} minutes less"],
    action_phrases: &[
        "Get outside",
        "Make today count",
        "Plan accordingly",
        "the sun is back",
        "the light is gaining",
        "turning point",
    ],
};
