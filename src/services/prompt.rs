// src/services/prompt.rs
use crate::services::trip_planner::TripDates;
use crate::trip::TripRequest;

/// Fixed pricing guidance the model is told to follow, tiered by route distance.
fn pricing_guidance() -> &'static str {
    r#"EXAMPLE TRANSPORT PRICING BY DISTANCE:
- Under 200 miles: Bus $20-60, Train $40-90, Flight usually not practical
- 200-500 miles: Bus $50-100, Train $80-180, Flight $120-250
- 500-1000 miles: Bus $80-150, Train $120-300, Flight $150-350
- Over 1000 miles: Bus $100-200, Train $200-500, Flight $200-500"#
}

fn route_examples() -> &'static str {
    r#"EXAMPLES OF GOOD ROUTE RESEARCH:
- Boston to New York: Greyhound, Peter Pan Bus, Amtrak (Northeast Regional), Delta/JetBlue flights
- Los Angeles to San Francisco: Greyhound, Amtrak (Coast Starlight), Southwest/Alaska flights
- College Park to Toronto: Greyhound (via NYC), NO direct Amtrak (would need multiple trains), budget flights from BWI
- Seattle to Portland: FlixBus, BoltBus, Amtrak Cascades, Alaska Airlines"#
}

/// Build the instruction block sent to the generation collaborator.
///
/// Pure function of the request, the resolved origin name and the derived
/// dates; no I/O happens here, so it is testable without any network access.
pub fn build_prompt(request: &TripRequest, origin: &str, dates: &TripDates) -> String {
    let destination = request.destination.trim();
    let budget = match request.budget {
        Some(amount) => format!("{amount}"),
        None => "Budget-conscious (assume $300-500 range)".to_string(),
    };
    let nights = dates.days - 1;

    format!(
        r#"You are a travel planning expert specializing in budget-friendly trips for students. You have extensive knowledge of transportation costs, hostel prices, and travel tips.

CRITICAL: You MUST research the ACTUAL transportation providers that service the route from {origin} to {destination}. DO NOT use placeholder names. Research which bus companies, train services, and airlines actually operate on this specific route.

Create a detailed travel plan with the following information:

TRIP DETAILS:
- Origin: {origin}
- Destination: {destination}
- Dates: {start} to {end} ({days} days in {month})
- Budget: {budget}
- Number of travelers: {travelers}
- Travel style: {style}

ROUTE-SPECIFIC RESEARCH REQUIRED:
Before generating the plan, think about what transportation actually exists for this route:
1. What bus companies operate between {origin} and {destination}? (Greyhound, FlixBus, Megabus, Peter Pan, BoltBus, regional carriers?)
2. What train services exist? (Amtrak, regional rail, commuter rail, or NO train service?)
3. What are the nearest airports and which airlines fly this route? (major carriers, budget airlines, or no viable flight?)
4. If a transportation mode doesn't exist or make sense for this route, DO NOT include it or mark it as "Not Available"

Generate a comprehensive trip plan in JSON format with this EXACT structure:
{{
  "destination": "{destination}",
  "origin": "{origin}",
  "duration": "{days} days",
  "totalCost": "estimated cost range with $ symbol",
  "dailyBudget": "per day estimate with $ symbol",

  "transport": [
    {{
      "type": "Bus",
      "name": "Megabus",
      "cost": "$65 round trip",
      "duration": "6 hours",
      "analysis": "Chose Megabus because it is the cheapest option (~$65) with direct routes, moderate comfort, and reliable schedule.",
      "bookingUrl": "https://us.megabus.com",
      "bookingInstructions": "Search from {origin} to {destination} for {start}"
    }},
    {{
      "type": "Train",
      "name": "Amtrak",
      "cost": "$120 round trip",
      "duration": "5.5 hours",
      "analysis": "Amtrak is faster than bus, more comfortable, but more expensive (~$120). Only considered direct routes from current location.",
      "bookingUrl": "https://www.amtrak.com",
      "bookingInstructions": "Search from {origin} to {destination} for {start}"
    }},
    {{
      "type": "Flight",
      "name": "Spirit Airlines",
      "cost": "$200 round trip",
      "duration": "1.5 hours",
      "analysis": "Flight is fastest option but most expensive. Budget airlines considered (Spirit, Frontier), but departure airport limited the choices.",
      "bookingUrl": "https://www.google.com/travel/flights",
      "bookingInstructions": "Search flights from {origin} to {destination} for {start}"
    }}
  ],

  "accommodation": {{
    "name": "Specific hostel/budget hotel name - NOT generic 'Hi + destination'",
    "cost": "$XX/night",
    "total": "$XXX for {nights} nights",
    "bookingUrl": "https://www.hostelworld.com or https://www.booking.com",
    "bookingInstructions": "Search for hostels in {destination} for {start} to {end}"
  }},

  "itinerary": [
    {{
      "day": 1,
      "activities": "Detailed morning, afternoon, evening activities specific to {destination}. Include specific attraction names, neighborhoods, and free/cheap options."
    }}
  ],

  "packingList": [
    "10-15 specific items based on {month} weather in {destination}",
    "Include weather-specific clothing",
    "Travel essentials",
    "Tech items"
  ],

  "safetyTips": [
    "5-7 specific safety tips for {destination}",
    "Include neighborhood safety info",
    "Emergency numbers",
    "Local customs to be aware of",
    "Scam warnings if applicable"
  ],

  "checklist": [
    "Passport/ID requirements",
    "Visa information if needed",
    "Travel insurance",
    "Booking confirmations",
    "Currency exchange",
    "SIM card/data plan",
    "Download offline maps",
    "Notify bank of travel"
  ],

  "recommendation": "One sentence explaining which transport option gives best value. Example: 'Take the Megabus for $65 and stay in a hostel to keep your total trip under $250!'"
}}

CRITICAL INSTRUCTIONS FOR TRANSPORTATION:
1. **RESEARCH THE ACTUAL ROUTE**: Think about which providers actually serve {origin} to {destination}
2. **Bus companies vary by region**:
   - East Coast: Greyhound, Peter Pan, Megabus, BoltBus
   - West Coast: Greyhound, FlixBus, Amtrak Thruway
   - Midwest: Greyhound, Burlington Trailways, Barons Bus
   - International: Greyhound (US-Canada), FlixBus (Europe)
3. **Train services are LOCATION-SPECIFIC**:
   - Amtrak operates in USA (but NOT all routes - check if route exists!)
   - VIA Rail in Canada
   - Regional/commuter rail for short distances
   - If NO train service exists between cities, say "Not Available" or skip it
4. **Airlines vary by route distance and airports**:
   - Short routes (<200 miles): Often no flights, use bus/train instead
   - Medium routes: Budget airlines (Spirit, Frontier, Southwest, Allegiant)
   - Check actual airports near both cities
   - If cities don't have airports nearby, mark as "Not Practical"
5. **Use REAL booking URLs** based on the provider you choose
6. **Provide realistic costs** based on typical prices for that route distance and provider

{route_examples}

OTHER CRITICAL INSTRUCTIONS:
1. For booking URLs:
   - Buses: Use actual provider website (greyhound.com, megabus.com, flixbus.com, peterpanbus.com, etc.)
   - Trains: Use amtrak.com (USA), viarail.ca (Canada), or specific regional rail site
   - Flights: Use https://www.google.com/travel/flights or https://www.kayak.com
   - Accommodation: Use https://www.hostelworld.com for hostels or https://www.booking.com for hotels
2. Include clear booking instructions with origin, destination, and dates
3. All URLs must be real, working websites
4. Make sure total costs add up correctly (transport + accommodation + daily expenses)
5. Create {days} unique daily itineraries with SPECIFIC attractions, museums, neighborhoods in {destination}
6. Include weather-appropriate packing for {month} in {destination}
7. Keep accommodation budget-friendly (hostels $25-45/night, budget hotels $50-75/night)
8. If budget is provided, ensure total cost stays within or slightly under it
9. Return ONLY valid JSON, absolutely no markdown formatting, no code blocks, no explanatory text
10. All cost values must include $ symbol

{pricing}

Generate the complete plan now:"#,
        origin = origin,
        destination = destination,
        start = dates.start_iso,
        end = dates.end_iso,
        days = dates.days,
        month = dates.month_name,
        budget = budget,
        travelers = request.travelers,
        style = request.travel_style,
        nights = nights,
        route_examples = route_examples(),
        pricing = pricing_guidance(),
    )
}
