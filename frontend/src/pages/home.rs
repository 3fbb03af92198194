use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::download_button::DownloadButton;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page min-h-screen bg-gradient-to-br from-slate-50 via-white to-indigo-50">
            // Hero Section
            <div class="relative overflow-hidden">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12 sm:py-16 lg:py-20">
                    <div class="text-center max-w-4xl mx-auto">
                        <h1 class="text-3xl sm:text-4xl lg:text-5xl xl:text-6xl font-bold text-gray-900 mb-6 sm:mb-8 leading-tight">
                            <span class="bg-gradient-to-r from-slate-700 to-indigo-600 bg-clip-text text-transparent">
                                {"Know where your time goes"}
                            </span>
                        </h1>

                        <p class="text-lg sm:text-xl lg:text-2xl text-gray-600 mb-8 sm:mb-12 leading-relaxed max-w-3xl mx-auto">
                            {"Tempo tracks your work automatically, right from the menu bar. "}
                            <span class="font-medium text-gray-800">{"No timers to start, no timesheets to fill."}</span>
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 sm:gap-6 justify-center items-center">
                            <DownloadButton location="hero" />
                        </div>
                    </div>
                </div>
            </div>

            // Features Section
            <div class="py-12 sm:py-16 lg:py-20 bg-white">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-12 sm:mb-16">
                        <h2 class="text-2xl sm:text-3xl lg:text-4xl font-bold text-gray-900 mb-4">
                            {"Why Tempo?"}
                        </h2>
                        <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                            {"Everything you need to understand your working day"}
                        </p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8">
                        // Feature Card 1
                        <div class="bg-gradient-to-br from-slate-50 to-indigo-50 rounded-2xl p-6 sm:p-8 text-center hover:shadow-lg transition-all duration-200 transform hover:-translate-y-1">
                            <div class="w-16 h-16 bg-slate-100 rounded-full flex items-center justify-center mx-auto mb-4 sm:mb-6">
                                <span class="text-2xl sm:text-3xl">{"⏱️"}</span>
                            </div>
                            <h3 class="text-xl sm:text-2xl font-semibold text-gray-900 mb-3">{"Automatic Tracking"}</h3>
                            <p class="text-gray-600 leading-relaxed">
                                {"Tempo notices which app and document you are in and files the time for you"}
                            </p>
                        </div>

                        // Feature Card 2
                        <div class="bg-gradient-to-br from-green-50 to-emerald-50 rounded-2xl p-6 sm:p-8 text-center hover:shadow-lg transition-all duration-200 transform hover:-translate-y-1">
                            <div class="w-16 h-16 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-4 sm:mb-6">
                                <span class="text-2xl sm:text-3xl">{"📊"}</span>
                            </div>
                            <h3 class="text-xl sm:text-2xl font-semibold text-gray-900 mb-3">{"Focus Insights"}</h3>
                            <p class="text-gray-600 leading-relaxed">
                                {"Daily and weekly reports show your deep-work streaks and what breaks them"}
                            </p>
                        </div>

                        // Feature Card 3
                        <div class="bg-gradient-to-br from-purple-50 to-violet-50 rounded-2xl p-6 sm:p-8 text-center hover:shadow-lg transition-all duration-200 transform hover:-translate-y-1">
                            <div class="w-16 h-16 bg-purple-100 rounded-full flex items-center justify-center mx-auto mb-4 sm:mb-6">
                                <span class="text-2xl sm:text-3xl">{"🔒"}</span>
                            </div>
                            <h3 class="text-xl sm:text-2xl font-semibold text-gray-900 mb-3">{"Private by Default"}</h3>
                            <p class="text-gray-600 leading-relaxed">
                                {"Your activity stays on your Mac. Nothing leaves the device unless you export it"}
                            </p>
                        </div>
                    </div>
                </div>
            </div>

            // Blog Teaser Section
            <div class="py-12 sm:py-16 bg-gray-50">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-8 sm:mb-12">
                        <h2 class="text-2xl sm:text-3xl lg:text-4xl font-bold text-gray-900 mb-3">{"From the blog"}</h2>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 sm:gap-8">
                        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-4 sm:p-6">
                            <h3 class="text-lg font-semibold text-gray-900 mb-2">
                                <Link<Route>
                                    to={Route::BlogPost { slug: "introducing-tempo".to_string() }}
                                    classes="hover:text-indigo-600"
                                >
                                    {"Introducing Tempo"}
                                </Link<Route>>
                            </h3>
                            <p class="text-gray-600">{"Why we built yet another time tracker, and what makes this one quiet."}</p>
                        </div>
                        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-4 sm:p-6">
                            <h3 class="text-lg font-semibold text-gray-900 mb-2">
                                <Link<Route>
                                    to={Route::BlogPost { slug: "measuring-deep-work".to_string() }}
                                    classes="hover:text-indigo-600"
                                >
                                    {"Measuring deep work"}
                                </Link<Route>>
                            </h3>
                            <p class="text-gray-600">{"What a focus streak actually is, and how Tempo counts one."}</p>
                        </div>
                    </div>
                </div>
            </div>

            // Call to Action Section
            <div class="py-12 sm:py-16 bg-white">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-2xl sm:text-3xl lg:text-4xl font-bold text-gray-900 mb-4">
                        {"Ready to find your tempo?"}
                    </h2>
                    <p class="text-lg text-gray-600 mb-8 max-w-2xl mx-auto">
                        {"Free while in beta. Runs on macOS, Apple Silicon and Intel."}
                    </p>
                    <DownloadButton location="cta_section" />
                </div>
            </div>
        </div>
    }
}
